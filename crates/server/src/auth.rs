use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Deserialize)]
struct Header {
    alg: String,
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

#[derive(Clone)]
pub struct TokenGuard {
    secret: String,
}

impl TokenGuard {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    // 从 Authorization 头中取出 Bearer token 并校验
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let value = match headers.get("Authorization").and_then(|h| h.to_str().ok()) {
            Some(v) => v,
            None => return false,
        };

        let mut parts = value.splitn(2, ' ');
        let scheme = parts.next().unwrap_or("");
        let token = parts.next().unwrap_or("");
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return false;
        }

        self.verify(token)
    }

    // 校验紧凑 JWS：只接受 HS256，拒绝 none 等降级算法；
    // 带 exp 的 token 过期即失效
    pub fn verify(&self, token: &str) -> bool {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return false;
        }

        let header_bytes = match URL_SAFE_NO_PAD.decode(parts[0]) {
            Ok(b) => b,
            Err(_) => return false,
        };
        let header: Header = match serde_json::from_slice(&header_bytes) {
            Ok(h) => h,
            Err(_) => return false,
        };
        if header.alg != "HS256" {
            return false;
        }

        let signature = match URL_SAFE_NO_PAD.decode(parts[2]) {
            Ok(s) => s,
            Err(_) => return false,
        };

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any size");
        mac.update(parts[0].as_bytes());
        mac.update(b".");
        mac.update(parts[1].as_bytes());
        if mac.verify_slice(&signature).is_err() {
            return false;
        }

        let payload_bytes = match URL_SAFE_NO_PAD.decode(parts[1]) {
            Ok(b) => b,
            Err(_) => return false,
        };
        let claims: Claims = match serde_json::from_slice(&payload_bytes) {
            Ok(c) => c,
            Err(_) => return false,
        };
        if let Some(exp) = claims.exp {
            if exp <= chrono::Utc::now().timestamp() {
                return false;
            }
        }

        true
    }
}
