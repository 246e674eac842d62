//! API key authentication middleware

use crate::auth::ApiKeyGuard;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::ResponseError;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;

/// API key middleware for Actix-web
///
/// Wrap the scope that holds protected handlers; requests that fail the
/// guard never reach them.
#[derive(Clone, Debug)]
pub struct ApiKeyMiddleware {
    guard: ApiKeyGuard,
}

impl ApiKeyMiddleware {
    pub fn new(guard: ApiKeyGuard) -> Self {
        Self { guard }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ApiKeyMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyMiddlewareService {
            service,
            guard: self.guard.clone(),
        }))
    }
}

/// Service implementation for API key middleware
pub struct ApiKeyMiddlewareService<S> {
    service: S,
    guard: ApiKeyGuard,
}

impl<S, B> Service<ServiceRequest> for ApiKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.guard.authenticate(req.request()) {
            Ok(_) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let response = req.into_response(err.error_response()).map_into_right_body();
                Box::pin(ready(Ok(response)))
            }
        }
    }
}
