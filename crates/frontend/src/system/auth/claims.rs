//! Чтение полезной нагрузки JWT (без проверки подписи)

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::TokenClaims;

pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    // Некоторые серверы оставляют `=` в base64url
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Токен читается и ещё не истёк
pub fn is_token_usable(token: &str, now_unix: i64) -> bool {
    decode_claims(token).is_some_and(|c| !c.is_expired(now_unix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = make_token(
            r#"{"sub":"7","username":"cajero","role":"CAJERO","permissions":["sales","cash_register"],"exp":2000000000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role.as_deref(), Some("CAJERO"));
        assert_eq!(claims.permissions.len(), 2);
        assert!(is_token_usable(&token, 1_700_000_000));
        assert!(!is_token_usable(&token, 2_000_000_001));
    }

    #[test]
    fn test_garbage_token() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("a.%%%.c").is_none());
        assert!(!is_token_usable("", 0));
    }
}
