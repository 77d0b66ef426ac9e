//! # 세션 서비스
//!
//! 로그인, 로그아웃, 토큰 재발급, 회원 탈퇴를 담당합니다.
//!
//! 신원(이메일)마다 리프레시 토큰 저장소에 "현재 리프레시 토큰" 하나만 남기며,
//! 저장소 항목의 존재가 곧 로그인 상태입니다.
//!
//! ```text
//! Anonymous ──login──▶ Authenticated ──logout / withdrawal──▶ Anonymous
//!                        │    ▲
//!                        └────┘ reissue_token (리프레시 토큰 회전)
//! ```
//!
//! 실패는 모두 고정된 `AppError` 종류로 보고되며, 상세 메시지에는 문제의 토큰이
//! 포함되므로 서버 로그에만 남깁니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        entities::members::Member,
        models::token::{TokenKind, TokenPair},
    },
    repositories::{members::MemberRepository, tokens::RevocationStore},
    services::members::PasswordEncryptor,
};
use super::jwt_provider::JwtTokenProvider;

#[derive(Clone)]
pub struct AuthService {
    member_repo: Arc<dyn MemberRepository>,
    password_encryptor: Arc<dyn PasswordEncryptor>,
    token_provider: Arc<JwtTokenProvider>,
    revocation_store: Arc<dyn RevocationStore>,
}

impl AuthService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        password_encryptor: Arc<dyn PasswordEncryptor>,
        token_provider: Arc<JwtTokenProvider>,
        revocation_store: Arc<dyn RevocationStore>,
    ) -> Self {
        Self {
            member_repo,
            password_encryptor,
            token_provider,
            revocation_store,
        }
    }

    /// 이메일/비밀번호를 확인하고 새 토큰 쌍을 발급합니다.
    ///
    /// 리프레시 토큰 저장에 실패하면 토큰을 돌려주지 않습니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let member = self.get_member_by_email(email).await?;
        self.validate_correct_password(&member, password)?;

        let tokens = self.issue_and_store(email).await?;

        log::info!("로그인 성공 - email: {}", email);
        Ok(tokens)
    }

    /// 리프레시 토큰 저장소 항목을 지워 해당 신원의 모든 리프레시 토큰을 무효화합니다.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        self.token_provider
            .verify(TokenKind::Access, access_token)
            .into_result(TokenKind::Access, access_token)?;
        let email = self.token_provider.extract_identity(TokenKind::Refresh, refresh_token)?;

        self.ensure_logged_in(&email, refresh_token).await?;
        self.revocation_store.delete(&email).await?;

        log::info!("로그아웃 - email: {}", email);
        Ok(())
    }

    /// 저장소의 현재 리프레시 토큰과 일치할 때만 새 토큰 쌍을 발급하고 저장소 값을 교체합니다.
    pub async fn reissue_token(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let email = self.token_provider.extract_identity(TokenKind::Refresh, refresh_token)?;
        self.get_member_by_email(&email).await?;

        match self.revocation_store.get(&email).await? {
            Some(current) if current == refresh_token => {}
            _ => {
                return Err(AppError::UnauthorizedUser(format!(
                    "인증 실패(로그아웃 또는 교체된 리프레시 토큰) - 토큰 : {}",
                    refresh_token
                )));
            }
        }

        let tokens = self.issue_and_store(&email).await?;

        log::info!("토큰 재발급 - email: {}", email);
        Ok(tokens)
    }

    /// 로그인 상태인 회원을 탈퇴시킵니다. 저장소 항목을 지운 뒤 회원 정보를 삭제합니다.
    pub async fn withdrawal(&self, access_token: &str) -> AppResult<()> {
        let email = self.token_provider.extract_identity(TokenKind::Access, access_token)?;

        self.ensure_logged_in(&email, access_token).await?;
        self.revocation_store.delete(&email).await?;

        if !self.member_repo.delete_by_email(&email).await? {
            return Err(AppError::UnauthorizedEmail(format!(
                "해당 이메일의 회원이 존재하지 않습니다. - 이메일 : {}",
                email
            )));
        }

        log::info!("회원 탈퇴 - email: {}", email);
        Ok(())
    }

    /// 액세스 토큰의 신원을 확인하고, 로그인 상태일 때만 그 이메일을 반환합니다.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<String> {
        let email = self.token_provider.extract_identity(TokenKind::Access, access_token)?;
        self.ensure_logged_in(&email, access_token).await?;
        Ok(email)
    }

    /// 해당 신원의 리프레시 토큰 저장소 항목을 지웁니다. 이미 없으면 아무 일도 하지 않습니다.
    pub async fn revoke_session(&self, email: &str) -> AppResult<()> {
        self.revocation_store.delete(email).await?;
        log::info!("세션 만료 처리 - email: {}", email);
        Ok(())
    }

    async fn issue_and_store(&self, email: &str) -> AppResult<TokenPair> {
        let access_token = self.token_provider.issue(TokenKind::Access, email)?;
        let refresh_token = self.token_provider.issue(TokenKind::Refresh, email)?;

        self.revocation_store
            .put(email, &refresh_token, self.token_provider.ttl(TokenKind::Refresh))
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn ensure_logged_in(&self, email: &str, token: &str) -> AppResult<()> {
        if !self.revocation_store.exists(email).await? {
            return Err(AppError::UnauthorizedUser(format!(
                "인증 실패(로그아웃된 사용자) - 토큰 : {}",
                token
            )));
        }
        Ok(())
    }

    async fn get_member_by_email(&self, email: &str) -> AppResult<Member> {
        self.member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::UnauthorizedEmail(format!(
                "해당 이메일의 회원이 존재하지 않습니다. - 이메일 : {}",
                email
            )))
    }

    fn validate_correct_password(&self, member: &Member, password: &str) -> AppResult<()> {
        let encrypted_password = self.password_encryptor.encrypt(password, &member.salt);
        if !member.match_password(&encrypted_password) {
            return Err(AppError::UnauthorizedPassword(format!(
                "로그인에 실패하였습니다. 비밀번호를 확인해주세요. - 이메일 : {}",
                member.email
            )));
        }
        Ok(())
    }
}
