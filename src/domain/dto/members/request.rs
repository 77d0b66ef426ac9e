//! 회원 요청 DTO
//!
//! 회원가입과 비밀번호 재설정 요청 데이터를 정의하고 검증합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

const PASSWORD_SPECIAL_CHARS: &str = "~!@#$%^&*?";

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "이메일 형식으로 입력해주세요."))]
    pub email: String,

    #[validate(length(min = 2, max = 20, message = "닉네임은 2~20자 사이로 입력해주세요."))]
    pub nickname: String,

    #[validate(
        length(min = 8, max = 16, message = "비밀번호는 8~16자 사이로 입력해주세요."),
        custom(function = "validate_password_strength")
    )]
    pub password: String,
}

/// 비밀번호 재설정 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest {
    #[validate(email(message = "이메일 형식으로 입력해주세요."))]
    pub email: String,

    #[validate(
        length(min = 8, max = 16, message = "비밀번호는 8~16자 사이로 입력해주세요."),
        custom(function = "validate_password_strength")
    )]
    pub new_password: String,
}

/// 영문자, 숫자, 특수문자(~!@#$%^&*?)를 각각 하나 이상 포함해야 합니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_letter && has_digit && has_special) {
        return Err(ValidationError::new("weak_password")
            .with_message("숫자, 영문자, 특수문자(~!@#$%^&*?)를 포함해야 합니다.".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(password: &str) -> SignUpRequest {
        SignUpRequest {
            email: "example@friendy.com".to_string(),
            nickname: "bokSungKim".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_password_strength_rules() {
        assert!(sign_up("password123!").validate().is_ok());
        assert!(sign_up("password123").validate().is_err());
        assert!(sign_up("password!!!").validate().is_err());
        assert!(sign_up("12345678!").validate().is_err());
    }

    #[test]
    fn test_password_length_rules() {
        assert!(sign_up("pa1!").validate().is_err());
        assert!(sign_up("password1234567890!").validate().is_err());
    }

    #[test]
    fn test_password_request_uses_camel_case() {
        let request: PasswordRequest = serde_json::from_str(
            r#"{"email":"example@friendy.com","newPassword":"newPass123!"}"#,
        )
        .unwrap();

        assert_eq!(request.new_password, "newPass123!");
        assert!(request.validate().is_ok());
    }
}
