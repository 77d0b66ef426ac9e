//! # 비밀번호 암호화
//!
//! 회원 비밀번호는 `Base64(SHA-256(평문 || salt))` 형태로 저장됩니다.
//! 솔트는 회원마다 32바이트 난수를 Base64로 인코딩해 생성합니다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 32;

/// 평문 비밀번호와 솔트로 저장용 다이제스트를 만드는 trait
pub trait PasswordEncryptor: Send + Sync {
    fn encrypt(&self, plain_password: &str, salt: &str) -> String;
}

/// SHA-256 다이제스트를 Base64로 인코딩하는 구현체
///
/// 같은 입력에는 항상 같은 결과를 반환합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordEncryptor;

impl PasswordEncryptor for Sha256PasswordEncryptor {
    fn encrypt(&self, plain_password: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plain_password.as_bytes());
        hasher.update(salt.as_bytes());
        STANDARD.encode(hasher.finalize())
    }
}

/// 솔트 생성 trait
pub trait SaltGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 32바이트 난수 솔트 생성기
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSaltGenerator;

impl SaltGenerator for RandomSaltGenerator {
    fn generate(&self) -> String {
        let mut salt = [0u8; SALT_BYTES];
        rand::thread_rng().fill_bytes(&mut salt);
        STANDARD.encode(salt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encrypt_returns_base64_digest() {
        let encrypted = Sha256PasswordEncryptor.encrypt("password123", "randomSalt");

        let decoded = STANDARD.decode(&encrypted).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let first = Sha256PasswordEncryptor.encrypt("password123", "randomSalt");
        let second = Sha256PasswordEncryptor.encrypt("password123", "randomSalt");

        assert_eq!(first, second);
    }

    #[test]
    fn test_encrypt_depends_on_password_and_salt() {
        let base = Sha256PasswordEncryptor.encrypt("password123", "randomSalt1");

        assert_ne!(base, Sha256PasswordEncryptor.encrypt("differentPassword", "randomSalt1"));
        assert_ne!(base, Sha256PasswordEncryptor.encrypt("password123", "randomSalt2"));
    }

    #[test]
    fn test_salt_is_32_bytes() {
        let salt = RandomSaltGenerator.generate();

        assert_eq!(STANDARD.decode(&salt).unwrap().len(), SALT_BYTES);
    }

    #[test]
    fn test_salt_is_unique() {
        let salts: HashSet<String> = (0..1000).map(|_| RandomSaltGenerator.generate()).collect();

        assert_eq!(salts.len(), 1000);
    }
}
