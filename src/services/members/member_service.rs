//! 회원 서비스
//!
//! 회원가입과 비밀번호 재설정을 담당합니다. 두 작업 모두 새 솔트를 만들고
//! 평문 비밀번호를 [`PasswordEncryptor`]로 다이제스트한 뒤 저장합니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::members::{PasswordRequest, SignUpRequest},
        entities::members::Member,
    },
    repositories::members::MemberRepository,
};
use super::encryption::{PasswordEncryptor, SaltGenerator};

#[derive(Clone)]
pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
    password_encryptor: Arc<dyn PasswordEncryptor>,
    salt_generator: Arc<dyn SaltGenerator>,
}

impl MemberService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        password_encryptor: Arc<dyn PasswordEncryptor>,
        salt_generator: Arc<dyn SaltGenerator>,
    ) -> Self {
        Self {
            member_repo,
            password_encryptor,
            salt_generator,
        }
    }

    /// 이메일, 닉네임 중복을 확인한 뒤 회원을 저장합니다.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<Member> {
        self.assert_unique_email(&request.email).await?;
        self.assert_unique_nickname(&request.nickname).await?;

        let salt = self.salt_generator.generate();
        let encrypted_password = self.password_encryptor.encrypt(&request.password, &salt);

        let member = Member::new(request.email, request.nickname, encrypted_password, salt);
        let saved = self.member_repo.save(member).await?;

        log::info!("회원가입 완료 - email: {}", saved.email);
        Ok(saved)
    }

    /// 새 솔트로 비밀번호 다이제스트를 교체합니다.
    ///
    /// 기존 리프레시 토큰은 건드리지 않습니다.
    pub async fn reset_password(&self, request: PasswordRequest) -> AppResult<()> {
        let mut member = self.member_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::UnauthorizedEmail(format!(
                "해당 이메일의 회원이 존재하지 않습니다. - 이메일 : {}",
                request.email
            )))?;

        let salt = self.salt_generator.generate();
        let encrypted_password = self.password_encryptor.encrypt(&request.new_password, &salt);

        member.reset_password(encrypted_password, salt);
        self.member_repo.update(&member).await?;

        log::info!("비밀번호 재설정 완료 - email: {}", member.email);
        Ok(())
    }

    async fn assert_unique_email(&self, email: &str) -> AppResult<()> {
        if self.member_repo.exists_by_email(email).await? {
            return Err(AppError::ConflictError("이미 가입된 이메일입니다.".to_string()));
        }
        Ok(())
    }

    async fn assert_unique_nickname(&self, nickname: &str) -> AppResult<()> {
        if self.member_repo.exists_by_nickname(nickname).await? {
            return Err(AppError::ConflictError("닉네임이 이미 존재합니다.".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::members::InMemoryMemberRepository;
    use crate::services::members::encryption::{RandomSaltGenerator, Sha256PasswordEncryptor};

    fn service(repo: Arc<InMemoryMemberRepository>) -> MemberService {
        MemberService::new(
            repo,
            Arc::new(Sha256PasswordEncryptor),
            Arc::new(RandomSaltGenerator),
        )
    }

    fn sign_up_request(email: &str, nickname: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            nickname: nickname.to_string(),
            password: "password123!".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_sign_up_stores_digest_not_plain_password() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let service = service(repo.clone());

        let member = service
            .sign_up(sign_up_request("example@friendy.com", "bokSungKim"))
            .await
            .unwrap();

        assert!(member.id.is_some());
        assert_ne!(member.password, "password123!");
        assert_eq!(
            member.password,
            Sha256PasswordEncryptor.encrypt("password123!", &member.salt)
        );
    }

    #[actix_web::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let service = service(repo);
        service.sign_up(sign_up_request("example@friendy.com", "bokSungKim")).await.unwrap();

        let result = service.sign_up(sign_up_request("example@friendy.com", "other")).await;

        assert!(matches!(result, Err(AppError::ConflictError(ref msg)) if msg == "이미 가입된 이메일입니다."));
    }

    #[actix_web::test]
    async fn test_sign_up_rejects_duplicate_nickname() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let service = service(repo);
        service.sign_up(sign_up_request("example@friendy.com", "bokSungKim")).await.unwrap();

        let result = service.sign_up(sign_up_request("other@friendy.com", "bokSungKim")).await;

        assert!(matches!(result, Err(AppError::ConflictError(ref msg)) if msg == "닉네임이 이미 존재합니다."));
    }

    #[actix_web::test]
    async fn test_reset_password_replaces_digest_and_salt() {
        let repo = Arc::new(InMemoryMemberRepository::new());
        let service = service(repo.clone());
        let before = service
            .sign_up(sign_up_request("example@friendy.com", "bokSungKim"))
            .await
            .unwrap();

        service
            .reset_password(PasswordRequest {
                email: "example@friendy.com".to_string(),
                new_password: "newPass123!".to_string(),
            })
            .await
            .unwrap();

        let after = repo.find_by_email("example@friendy.com").await.unwrap().unwrap();
        assert_ne!(after.salt, before.salt);
        assert_eq!(after.password, Sha256PasswordEncryptor.encrypt("newPass123!", &after.salt));
    }

    #[actix_web::test]
    async fn test_reset_password_for_unknown_email_fails() {
        let service = service(Arc::new(InMemoryMemberRepository::new()));

        let result = service
            .reset_password(PasswordRequest {
                email: "nobody@friendy.com".to_string(),
                new_password: "newPass123!".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::UnauthorizedEmail(_))));
    }
}
