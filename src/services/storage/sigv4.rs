//! AWS Signature Version 4 쿼리 문자열 서명 (Pre-signed URL)
//!
//! 서명 헤더는 `host` 하나뿐이고 페이로드는 `UNSIGNED-PAYLOAD`이므로,
//! 서명된 URL만 있으면 어떤 HTTP 클라이언트로도 PUT/GET/DELETE 할 수 있습니다.
//!
//! - 엔드포인트가 없으면 가상 호스트 방식: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
//! - 엔드포인트가 있으면 경로 방식: `{endpoint}/{bucket}/{key}` (MinIO 등)

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use crate::{
    config::S3Settings,
    core::errors::{AppError, AppResult, ErrorContext},
};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";
const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

fn hmac_sha256(key: &[u8], data: &str) -> AppResult<Vec<u8>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).context("HMAC 키 오류")?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// 키의 각 경로 세그먼트를 URI 인코딩합니다 (`/`는 유지).
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Debug, Clone)]
pub struct S3Presigner {
    settings: S3Settings,
}

impl S3Presigner {
    pub fn new(settings: S3Settings) -> Self {
        Self { settings }
    }

    /// (scheme, host, 버킷 기준 경로 접두사)
    fn origin(&self) -> (String, String, String) {
        match &self.settings.endpoint {
            Some(endpoint) => {
                let (scheme, host) = endpoint
                    .split_once("://")
                    .unwrap_or(("https", endpoint.as_str()));
                (scheme.to_string(), host.to_string(), format!("/{}", self.settings.bucket))
            }
            None => {
                let s3_host = if self.settings.region == "us-east-1" {
                    "s3.amazonaws.com".to_string()
                } else {
                    format!("s3.{}.amazonaws.com", self.settings.region)
                };
                ("https".to_string(), format!("{}.{}", self.settings.bucket, s3_host), String::new())
            }
        }
    }

    fn canonical_uri(&self, key: &str) -> String {
        let (_, _, prefix) = self.origin();
        format!("{}/{}", prefix, encode_key(key))
    }

    /// 쿼리 없는 오브젝트 URL
    pub fn object_url(&self, key: &str) -> String {
        let (scheme, host, _) = self.origin();
        format!("{}://{}{}", scheme, host, self.canonical_uri(key))
    }

    /// 이 버킷의 오브젝트 URL이면 키를 돌려주고, 아니면 `None`
    pub fn key_for_url(&self, url: &str) -> Option<String> {
        let base = self.object_url("");
        let encoded = url.strip_prefix(&base)?;
        let encoded = encoded.split(['?', '#']).next().unwrap_or_default();
        if encoded.is_empty() {
            return None;
        }

        urlencoding::decode(encoded).ok().map(|key| key.into_owned())
    }

    /// `method` 요청용 Pre-signed URL을 생성합니다.
    pub fn presign(&self, method: &str, key: &str, expires_secs: u64, now: DateTime<Utc>) -> Result<String, AppError> {
        let (scheme, host, _) = self.origin();
        let canonical_uri = self.canonical_uri(key);

        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date = now.format("%Y%m%d").to_string();
        let scope = format!("{}/{}/{}/aws4_request", date, self.settings.region, SERVICE);
        let credential = format!("{}/{}", self.settings.access_key_id, scope);

        // 이름순 정렬 상태 유지
        let query = [
            ("X-Amz-Algorithm", ALGORITHM.to_string()),
            ("X-Amz-Credential", credential),
            ("X-Amz-Date", amz_date.clone()),
            ("X-Amz-Expires", expires_secs.to_string()),
            ("X-Amz-SignedHeaders", "host".to_string()),
        ]
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

        let canonical_request = format!(
            "{}\n{}\n{}\nhost:{}\n\nhost\n{}",
            method, canonical_uri, query, host, UNSIGNED_PAYLOAD
        );

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let k_date = hmac_sha256(format!("AWS4{}", self.settings.secret_access_key).as_bytes(), &date)?;
        let k_region = hmac_sha256(&k_date, &self.settings.region)?;
        let k_service = hmac_sha256(&k_region, SERVICE)?;
        let k_signing = hmac_sha256(&k_service, "aws4_request")?;
        let signature = hex::encode(hmac_sha256(&k_signing, &string_to_sign)?);

        Ok(format!(
            "{}://{}{}?{}&X-Amz-Signature={}",
            scheme, host, canonical_uri, query, signature
        ))
    }
}
