use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("SERVER_PORT_PORTAL", "8080");
        env::set_var("SERVER_BODY_LIMIT", "10");
        env::set_var("SERVER_TIMEOUT", "30");
        env::set_var("NODE_API_BASE_URL", "https://billing.example.com/");
        env::set_var("NODE_API_KEY", "testapikey");
        env::set_var("PORTAL_JWT_SECRET", "supersecretjwtsecretforunittesting123");
    }
}

#[test]
fn test_validate_portal_jwt_success() {
    set_env_vars();
    let secret = "supersecretjwtsecretforunittesting123";
    let my_claims = PortalClaims {
        sub: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        role: "customer".to_string(),
        email: Some("test@example.com".to_string()),
        exp: 9999999999, // far future
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let claims = validate_portal_jwt(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, my_claims.sub);
    assert_eq!(claims.role, my_claims.role);
    assert_eq!(claims.email, my_claims.email);
}

#[test]
fn test_validate_portal_jwt_expired() {
    set_env_vars();
    let secret = "supersecretjwtsecretforunittesting123";
    let my_claims = PortalClaims {
        sub: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        role: "customer".to_string(),
        email: Some("test@example.com".to_string()),
        exp: 1, // past
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = validate_portal_jwt(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_portal_jwt_invalid_signature() {
    set_env_vars();
    let secret = "wrongsecret";
    let my_claims = PortalClaims {
        sub: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        role: "admin".to_string(),
        email: Some("test@example.com".to_string()),
        exp: 9999999999,
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    let result = validate_portal_jwt(&token);
    assert!(result.is_err());
}
