use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "이메일 형식으로 입력해주세요."))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호가 입력되지 않았습니다."))]
    pub password: String,
}
