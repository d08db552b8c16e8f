use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use domain::Comment;

const BASE_URL: &str = "http://127.0.0.1:8080";
const JWT_SECRET: &str = "mission impossible";

#[derive(Serialize)]
struct CommentPayload {
    slug: String,
    author: String,
    body: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    println!("Starting remarq test client...");

    println!("\n[1/6] Checking liveness...");
    let alive = client
        .get(format!("{}/alive", BASE_URL))
        .send()
        .await?
        .text()
        .await?;
    println!("   -> {}", alive);

    println!("\n[2/6] Signing bearer token...");
    let token = sign_token(JWT_SECRET);

    println!("\n[3/6] Posting comment...");
    let payload = CommentPayload {
        slug: "hello-remarq".to_string(),
        author: "Ferris".to_string(),
        body: "This is a message from the remarq test client!".to_string(),
    };
    let resp = client
        .post(format!("{}/api/v1/comment", BASE_URL))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await?;
    if !resp.status().is_success() {
        println!("   -> ❌ Failed to post: {:?}", resp.text().await?);
        return Ok(());
    }
    let posted: Comment = resp.json().await?;
    println!("   -> ✅ Posted comment {}", posted.id);
    println!("   -> Returned body (pre-processing): {}", posted.body);

    println!("\n[4/6] Fetching it back...");
    let fetched: Comment = client
        .get(format!("{}/api/v1/comment/{}", BASE_URL, posted.id))
        .send()
        .await?
        .json()
        .await?;
    println!("   -> Stored body (post-processing): {}", fetched.body);

    println!("\n[5/6] Updating it...");
    let update = CommentPayload {
        slug: "hello-remarq".to_string(),
        author: "Ferris".to_string(),
        body: "Edited by the remarq test client.".to_string(),
    };
    let updated: Comment = client
        .put(format!("{}/api/v1/comment/{}", BASE_URL, posted.id))
        .bearer_auth(&token)
        .json(&update)
        .send()
        .await?
        .json()
        .await?;
    println!("   -> Updated body: {}", updated.body);

    println!("\n[6/6] Deleting it...");
    let resp = client
        .delete(format!("{}/api/v1/comment/{}", BASE_URL, posted.id))
        .bearer_auth(&token)
        .send()
        .await?;
    println!("   -> {}", resp.text().await?);

    let gone = client
        .get(format!("{}/api/v1/comment/{}", BASE_URL, posted.id))
        .send()
        .await?;
    println!("   -> Follow-up GET status: {}", gone.status());

    Ok(())
}

fn sign_token(secret: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let exp = chrono::Utc::now().timestamp() + 3600;
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"test-client","exp":{}}}"#, exp));

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    let sig = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{}.{}.{}", header, payload, sig)
}
