#![allow(dead_code)]

use std::{
    future::Future,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use newrel::{spotify::TokenProvider, types::Token};
use serde_json::{Value, json};

/// Token provider handing out the same token on every call and counting
/// how often it was asked.
pub struct StaticProvider {
    token: Token,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::new(Token::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenProvider for StaticProvider {
    fn fetch_token(&self) -> impl Future<Output = Token> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let token = self.token.clone();
        async move { token }
    }
}

pub fn token(access_token: &str) -> Token {
    serde_json::from_value(json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .unwrap()
}

pub fn ids(items: &[Value]) -> Vec<&str> {
    items.iter().map(|item| item["id"].as_str().unwrap()).collect()
}

pub fn temp_output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("newrel-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
