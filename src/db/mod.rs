//! MongoDB 연결 관리
//!
//! 시작 시 한 번 연결하고 `ping` 명령으로 가용성을 확인합니다.
//! 연결과 확인 전체가 시작 데드라인(기본 10초) 안에 끝나야 합니다.

use std::time::Duration;

use log::info;
use mongodb::{Client, bson::doc, options::ClientOptions};

use crate::config::DataConfig;
use crate::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// MongoDB 클라이언트를 만들고 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 연결 실패, 데드라인 초과
    pub async fn connect(config: &DataConfig, startup_timeout: Duration) -> AppResult<Self> {
        let connect = async {
            let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
            client_options.app_name = Some("session_gate".to_string());
            client_options.connect_timeout = Some(startup_timeout);
            client_options.server_selection_timeout = Some(startup_timeout);

            let client = Client::with_options(client_options)?;
            client
                .database(&config.database_name)
                .run_command(doc! { "ping": 1 })
                .await?;
            Ok::<_, mongodb::error::Error>(client)
        };

        let client = tokio::time::timeout(startup_timeout, connect)
            .await
            .map_err(|_| AppError::DatabaseError("MongoDB connection timed out".to_string()))??;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
