use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use utils::AppError;
use validator::Validate;

/// JSON 请求体 + validator 校验
///
/// 解析失败（缺字段、类型错误、Content-Type 不对）和校验失败都统一返回 400。
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationExtractor<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidationExtractor<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(format!("Malformed request body: {}", rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| AppError::BadRequest(errors.to_string().replace('\n', "; ")))?;

        Ok(ValidationExtractor(value))
    }
}
