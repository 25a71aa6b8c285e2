use actix_web::http::Method;

/// Routes reachable without a bearer token.
const PUBLIC_ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("POST", "/users"),
];

pub fn is_public(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return true;
    }

    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    PUBLIC_ROUTES
        .iter()
        .any(|(public_method, public_path)| method.as_str() == *public_method && path == *public_path)
}
