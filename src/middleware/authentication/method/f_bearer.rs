use crate::connectors::{AuthProvider, TokenCache};
use crate::middleware::authentication::get_header;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

fn try_extract_token(authorization: String) -> Result<String, String> {
    let mut authorization_parts = authorization.splitn(2, ' ');
    match authorization_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer missing scheme".to_string()),
    }

    match authorization_parts.next().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => {
            tracing::debug!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(authorization) => authorization,
        None => return Ok(false),
    };

    let token = try_extract_token(authorization)?;
    let provider = req
        .app_data::<web::Data<Arc<dyn AuthProvider>>>()
        .ok_or_else(|| {
            tracing::error!("auth provider is not registered");
            "Authentication unavailable".to_string()
        })?
        .clone();
    let cache = req.app_data::<web::Data<TokenCache>>().cloned();

    let cached = match &cache {
        Some(cache) => cache.get(&token).await,
        None => None,
    };
    let user = match cached {
        Some(user) => user,
        None => {
            let user = provider.verify(&token).await.map_err(|err| {
                tracing::debug!("token rejected: {}", err);
                "Invalid or expired token".to_string()
            })?;
            if let Some(cache) = &cache {
                cache.insert(token, user.clone()).await;
            }
            user
        }
    };

    tracing::debug!("authenticated user {}", user.id);
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(try_extract_token("Bearer abc".to_string()), Ok("abc".to_string()));
        assert!(try_extract_token("Basic abc".to_string()).is_err());
        assert!(try_extract_token("Bearer ".to_string()).is_err());
        assert!(try_extract_token("Bearer".to_string()).is_err());
    }
}
