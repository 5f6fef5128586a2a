//! MongoDB 연결과 트랜잭션 세션
//!
//! 장소 생성/삭제는 `places`와 `users` 두 컬렉션을 하나의 트랜잭션으로
//! 변경하므로, MongoDB는 레플리카셋(또는 샤드 클러스터)으로 구동되어야 합니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="places_dev"
//! ```

use mongodb::{
    bson::doc,
    options::{Acknowledgment, ClientOptions, ReadConcern, TransactionOptions, WriteConcern},
    Client, ClientSession, Collection,
};
use std::env;
use log::{debug, info};

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "places_dev";

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI` / `DATABASE_NAME`으로 연결하고 `ping`으로 검증합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("places_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 이름으로 타입이 지정된 컬렉션 핸들을 얻습니다.
    pub fn collection_named<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 세션을 열고 majority read/write concern 트랜잭션을 시작합니다.
    ///
    /// 반환된 세션은 호출자가 커밋하거나 중단해야 합니다. 둘 다 하지 않고
    /// 드롭되면 드라이버가 트랜잭션을 중단합니다.
    pub async fn start_transaction(&self) -> mongodb::error::Result<ClientSession> {
        let mut session = self.client.start_session().await?;

        let options = TransactionOptions::builder()
            .read_concern(ReadConcern::majority())
            .write_concern(WriteConcern::builder().w(Acknowledgment::Majority).build())
            .build();

        session.start_transaction().with_options(options).await?;
        debug!("트랜잭션 시작: {}", self.database_name);

        Ok(session)
    }
}
