//! # 회원 리포지토리
//!
//! 회원 엔티티의 데이터 액세스 계층입니다. 인증 서비스는 이메일로 회원을 찾고,
//! 회원가입은 이메일/닉네임 중복 여부를 확인합니다.
//!
//! ## 구현체
//!
//! | 구현체 | 저장소 |
//! |--------|--------|
//! | [`MongoMemberRepository`] | MongoDB `members` 컬렉션 (email, nickname 유니크 인덱스) |
//! | [`InMemoryMemberRepository`] | 프로세스 메모리 (테스트용) |

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::members::Member;

const COLLECTION_NAME: &str = "members";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 회원 데이터 액세스 trait
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool>;

    /// 새 회원을 저장하고 ID가 채워진 엔티티를 반환합니다.
    async fn save(&self, member: Member) -> AppResult<Member>;

    /// 이메일 기준으로 비밀번호 다이제스트/솔트를 갱신합니다.
    async fn update(&self, member: &Member) -> AppResult<()>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete_by_email(&self, email: &str) -> AppResult<bool>;
}

/// MongoDB 기반 회원 리포지토리
#[derive(Clone)]
pub struct MongoMemberRepository {
    collection: Collection<Member>,
}

impl MongoMemberRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Member>(COLLECTION_NAME),
        }
    }

    /// email, nickname 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nickname_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, nickname_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("members 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(count > 0)
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool> {
        let count = self.collection
            .count_documents(doc! { "nickname": nickname })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(count > 0)
    }

    async fn save(&self, mut member: Member) -> AppResult<Member> {
        let result = self.collection
            .insert_one(&member)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!(
                        "이미 가입된 이메일 또는 닉네임입니다. - 이메일 : {}",
                        member.email
                    ))
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        member.id = result.inserted_id.as_object_id();
        Ok(member)
    }

    async fn update(&self, member: &Member) -> AppResult<()> {
        let result = self.collection
            .update_one(
                doc! { "email": member.email.as_str() },
                doc! { "$set": {
                    "password": member.password.as_str(),
                    "salt": member.salt.as_str(),
                    "updated_at": member.updated_at,
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::UnauthorizedEmail(format!(
                "해당 이메일의 회원이 존재하지 않습니다. - 이메일 : {}",
                member.email
            )));
        }
        Ok(())
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

/// 유니크 인덱스 위반(E11000)
///
/// 중복 확인과 저장 사이에 다른 요청이 먼저 저장한 경우입니다.
fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 메모리 기반 회원 리포지토리
///
/// MongoDB 유니크 인덱스와 같이 이메일, 닉네임 중복 저장을 거부합니다.
#[derive(Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, Member>>> {
        self.members
            .read()
            .map_err(|_| AppError::DatabaseError("회원 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Member>>> {
        self.members
            .write()
            .map_err(|_| AppError::DatabaseError("회원 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        Ok(self.read()?.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.read()?.contains_key(email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool> {
        Ok(self.read()?.values().any(|m| m.nickname == nickname))
    }

    async fn save(&self, mut member: Member) -> AppResult<Member> {
        let mut members = self.write()?;
        if members.contains_key(&member.email)
            || members.values().any(|m| m.nickname == member.nickname)
        {
            return Err(AppError::ConflictError(format!(
                "이미 가입된 이메일 또는 닉네임입니다. - 이메일 : {}",
                member.email
            )));
        }
        member.id = Some(ObjectId::new());
        members.insert(member.email.clone(), member.clone());
        Ok(member)
    }

    async fn update(&self, member: &Member) -> AppResult<()> {
        let mut members = self.write()?;
        match members.get_mut(&member.email) {
            Some(stored) => {
                *stored = member.clone();
                Ok(())
            }
            None => Err(AppError::UnauthorizedEmail(format!(
                "해당 이메일의 회원이 존재하지 않습니다. - 이메일 : {}",
                member.email
            ))),
        }
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.write()?.remove(email).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: &str, nickname: &str) -> Member {
        Member::new(
            email.to_string(),
            nickname.to_string(),
            "digest".to_string(),
            "salt".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_is_findable() {
        let repo = InMemoryMemberRepository::new();

        let saved = repo.save(member("example@friendy.com", "bokSungKim")).await.unwrap();

        assert!(saved.id.is_some());
        assert!(repo.exists_by_email("example@friendy.com").await.unwrap());
        assert!(repo.exists_by_nickname("bokSungKim").await.unwrap());
        assert_eq!(
            repo.find_by_email("example@friendy.com").await.unwrap().map(|m| m.nickname),
            Some("bokSungKim".to_string())
        );
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let repo = InMemoryMemberRepository::new();
        let mut saved = repo.save(member("example@friendy.com", "bokSungKim")).await.unwrap();

        saved.reset_password("new-digest".to_string(), "new-salt".to_string());
        repo.update(&saved).await.unwrap();
        let found = repo.find_by_email("example@friendy.com").await.unwrap().unwrap();
        assert_eq!(found.password, "new-digest");

        assert!(repo.delete_by_email("example@friendy.com").await.unwrap());
        assert!(!repo.delete_by_email("example@friendy.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_save_rejects_duplicate_email_or_nickname() {
        let repo = InMemoryMemberRepository::new();
        repo.save(member("example@friendy.com", "bokSungKim")).await.unwrap();

        let same_email = repo.save(member("example@friendy.com", "another")).await;
        let same_nickname = repo.save(member("other@friendy.com", "bokSungKim")).await;

        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
        assert!(matches!(same_nickname, Err(AppError::ConflictError(_))));
        assert!(!repo.exists_by_email("other@friendy.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_update_missing_member_fails() {
        let repo = InMemoryMemberRepository::new();

        let result = repo.update(&member("nobody@friendy.com", "nobody")).await;

        assert!(matches!(result, Err(AppError::UnauthorizedEmail(_))));
    }
}
