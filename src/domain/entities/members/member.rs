//! Member Entity Implementation
//!
//! 커뮤니티 회원 엔티티입니다. 인증에 필요한 자격 증명(다이제스트 + 솔트)을 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 회원 엔티티
///
/// `email`이 시스템 전역 식별자이며 리보케이션 저장소의 키로도 쓰입니다.
/// `password`에는 평문이 아닌 `encrypt(평문, salt)` 결과가 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (unique)
    pub email: String,
    /// 닉네임 (unique)
    pub nickname: String,
    /// 암호화된 비밀번호 다이제스트
    pub password: String,
    /// 다이제스트 계산에 사용된 솔트
    pub salt: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Member {
    pub fn new(email: String, nickname: String, encrypted_password: String, salt: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            password: encrypted_password,
            salt,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 다이제스트와 비교
    pub fn match_password(&self, encrypted_password: &str) -> bool {
        self.password == encrypted_password
    }

    /// 새 다이제스트와 솔트로 교체
    pub fn reset_password(&mut self, encrypted_password: String, salt: String) {
        self.password = encrypted_password;
        self.salt = salt;
        self.updated_at = DateTime::now();
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_password() {
        let member = Member::new(
            "example@friendy.com".to_string(),
            "bokSungKim".to_string(),
            "digest".to_string(),
            "salt".to_string(),
        );

        assert!(member.match_password("digest"));
        assert!(!member.match_password("other"));
    }

    #[test]
    fn test_reset_password_replaces_digest_and_salt() {
        let mut member = Member::new(
            "example@friendy.com".to_string(),
            "bokSungKim".to_string(),
            "digest".to_string(),
            "salt".to_string(),
        );

        member.reset_password("new-digest".to_string(), "new-salt".to_string());

        assert!(member.match_password("new-digest"));
        assert_eq!(member.salt, "new-salt");
    }
}
