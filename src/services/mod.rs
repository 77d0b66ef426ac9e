//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 협력 객체(`Arc<dyn Trait>`)를 받아 조립되며,
//! `main`에서 한 번 만들어 `web::Data`로 핸들러에 공유됩니다.
//!
//! - [`auth`] - 토큰 발급/검증, 세션 관리
//! - [`members`] - 회원가입, 비밀번호 재설정, 비밀번호 암호화

pub mod auth;
pub mod members;
