//! # Service Registry
//!
//! `#[service]` / `#[repository]` 매크로가 생성하는 싱글톤들을 연결하는
//! 타입 기반 서비스 로케이터입니다.
//!
//! - 매크로가 붙은 구조체는 `inventory`를 통해 컴파일 타임에 등록되고,
//!   `Arc<T>` 필드는 생성 시점에 [`ServiceLocator::get`]으로 주입됩니다.
//! - 데이터베이스 연결, 트레이트 객체를 조합해 만든 장소 서비스처럼
//!   매크로로 만들 수 없는 인스턴스는 [`ServiceLocator::set`]으로 직접 등록합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let users = UserService::instance();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// `#[service]` 매크로가 구현하는 서비스 트레이트
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 리포지토리 트레이트
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`inventory::submit!`으로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`inventory::submit!`으로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    debug!("서비스 이름 캐시 초기화: {}개", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    debug!("리포지토리 이름 캐시 초기화: {}개", cache.len());
    cache
});

/// `"place_repository"` -> `"place"`, `"token_service"` -> `"token"`
fn strip_registration_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// `"crate::services::users::UserService"` -> `"UserService"`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 ID 기반 싱글톤 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    /// 등록된 인스턴스를 조회하고, 없으면 매크로 등록 정보로 생성합니다.
    ///
    /// 매크로가 생성한 생성자에서 의존성 주입에 사용되므로 실패 시
    /// `Result` 대신 패닉합니다. 패닉은 애플리케이션 시작 시점의
    /// [`ServiceLocator::initialize_all`]에서 드러납니다.
    ///
    /// # Panics
    ///
    /// * 순환 의존성이 감지된 경우
    /// * 타입에 대응하는 등록 정보가 없는 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::try_get::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let created = Self::construct::<T>(short_type_name(type_name));

        LOCATOR.initializing.write().unwrap_or_else(PoisonError::into_inner).remove(&type_id);

        match created {
            Some(instance) => {
                let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
                instances
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
                instance
            }
            None => panic!(
                "Service not found: {}. Register it with #[service], #[repository] or ServiceLocator::set()",
                type_name
            ),
        }
    }

    /// 이미 생성되었거나 직접 등록된 인스턴스만 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(PoisonError::into_inner);
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct<T: 'static + Send + Sync>(short_name: &str) -> Option<Arc<T>> {
        let boxed = if let Some(entity) = short_name.strip_suffix("Repository") {
            let registration = REPOSITORY_NAME_CACHE.get(&entity.to_lowercase())?;
            (registration.constructor)()
        } else if let Some(entity) = short_name.strip_suffix("Service") {
            let registration = SERVICE_NAME_CACHE.get(&entity.to_lowercase())?;
            (registration.constructor)()
        } else {
            return None;
        };

        boxed.downcast::<Arc<T>>().ok().map(|instance| *instance)
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입의 기존 인스턴스는 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저, 서비스를 나중에 생성하여 누락된 의존성이
    /// 첫 요청이 아니라 시작 시점에 드러나도록 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 서비스 레지스트리 초기화 중...");

        let mut repository_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {}", registration.name);
            repository_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {}", registration.name);
            service_count += 1;
        }

        info!(
            "✅ 레지스트리 초기화 완료: 리포지토리 {}개, 서비스 {}개",
            repository_count, service_count
        );
        Ok(())
    }
}
