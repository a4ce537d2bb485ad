mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::Row;

async fn find_id(client: &reqwest::Client, server: &common::TestServer, token: &str, username: &str) -> Result<i64> {
    let users = client
        .get(server.url("/users"))
        .bearer_auth(token)
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;

    users
        .iter()
        .find(|u| u["username"] == username)
        .and_then(|u| u["id"].as_i64())
        .context("created user missing from list")
}

#[tokio::test]
async fn user_lifecycle() -> Result<()> {
    let Some(database_url) = common::database_url() else {
        eprintln!("DATABASE_URL not set; skipping user_lifecycle");
        return Ok(());
    };
    let pool = common::prepare_schema(&database_url).await?;
    let server = common::start_server().await?;
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let username = common::unique_username("ann");
    let payload = json!({"name": "Ann", "username": username, "email": "a@x.com", "password": "p1"});

    // Create echoes the submitted payload
    let res = client
        .post(server.url("/users"))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, payload);

    let id = find_id(&client, &server, &token, &username).await?;

    // Read path carries no credential
    let res = client
        .get(server.url(&format!("/users/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let user = res.json::<Value>().await?;
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["username"], username.as_str());
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());

    // Credential is stored hashed
    let stored: String = sqlx::query("SELECT password FROM users WHERE id = $1")
        .bind(id as i32)
        .fetch_one(&pool)
        .await?
        .try_get("password")?;
    assert_ne!(stored, "p1");
    assert!(stored.starts_with("$argon2"));

    // Update touches name, username, email only
    let renamed = format!("{}_b", username);
    let update = json!({"name": "Ann B", "username": renamed, "email": "b@x.com"});
    let res = client
        .put(server.url(&format!("/users/{}", id)))
        .bearer_auth(&token)
        .json(&update)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, update);

    let user = client
        .get(server.url(&format!("/users/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(user["name"], "Ann B");
    assert_eq!(user["username"], renamed.as_str());
    assert_eq!(user["email"], "b@x.com");
    assert_eq!(user["role"], "user");

    let after: String = sqlx::query("SELECT password FROM users WHERE id = $1")
        .bind(id as i32)
        .fetch_one(&pool)
        .await?
        .try_get("password")?;
    assert_eq!(after, stored);

    // Delete, then the row is gone
    let res = client
        .delete(server.url(&format!("/users/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"message": "User deleted successfully"}));

    let res = client
        .get(server.url(&format!("/users/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn missing_user_is_not_found() -> Result<()> {
    let Some(database_url) = common::database_url() else {
        eprintln!("DATABASE_URL not set; skipping missing_user_is_not_found");
        return Ok(());
    };
    let pool = common::prepare_schema(&database_url).await?;
    sqlx::query("DELETE FROM users WHERE id = 999999").execute(&pool).await?;

    let server = common::start_server().await?;
    let client = reqwest::Client::new();
    let token = common::admin_token();

    let res = client.get(server.url("/users/999999")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "User not found");

    let res = client
        .put(server.url("/users/999999"))
        .bearer_auth(&token)
        .json(&json!({"name": "x", "username": "x", "email": "x"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(server.url("/users/999999")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn health_reports_store() -> Result<()> {
    let Some(database_url) = common::database_url() else {
        eprintln!("DATABASE_URL not set; skipping health_reports_store");
        return Ok(());
    };
    common::prepare_schema(&database_url).await?;
    let server = common::start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/health"))
        .bearer_auth(common::admin_token())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    Ok(())
}
