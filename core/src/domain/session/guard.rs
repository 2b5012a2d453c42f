use crate::domain::session::entities::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    SymptomChecker,
    HealthReport,
    Emergency,
    Calendar,
    About,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::SymptomChecker => "/symptom-checker",
            Route::HealthReport => "/health-report",
            Route::Emergency => "/emergency",
            Route::Calendar => "/calendar",
            Route::About => "/about",
            Route::NotFound => "*",
        }
    }

    /// Routes reachable without a session.
    const PUBLIC: [Route; 4] = [
        Route::Login,
        Route::Register,
        Route::ForgotPassword,
        Route::ResetPassword,
    ];

    /// Routes reachable with a session. `/` is handled separately.
    const AUTHENTICATED: [Route; 7] = [
        Route::Dashboard,
        Route::SymptomChecker,
        Route::HealthReport,
        Route::Emergency,
        Route::Calendar,
        Route::About,
        Route::ResetPassword,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session lookup still pending; show the splash.
    Loading,
    Render(Route),
    Redirect(Route),
}

pub struct RouteGuard;

impl RouteGuard {
    pub fn resolve(path: &str, snapshot: &SessionSnapshot) -> RouteDecision {
        if snapshot.loading {
            return RouteDecision::Loading;
        }

        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if snapshot.is_authenticated() {
            if path == Route::Login.path() {
                return RouteDecision::Redirect(Route::Dashboard);
            }
            let route = Route::AUTHENTICATED
                .into_iter()
                .find(|route| route.path() == path)
                .unwrap_or(Route::NotFound);
            return RouteDecision::Render(route);
        }

        match Route::PUBLIC.into_iter().find(|route| route.path() == path) {
            Some(route) => RouteDecision::Render(route),
            None => RouteDecision::Redirect(Route::Login),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::session::entities::{Session, User};

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot::resolved(Some(Session {
            access_token: "token".to_string(),
            user: User {
                id: Uuid::new_v4(),
                email: "kim@example.com".to_string(),
                full_name: None,
                email_confirmed: true,
            },
            created_at: Utc::now(),
        }))
    }

    #[test]
    fn test_loading_blocks_routing() {
        assert_eq!(
            RouteGuard::resolve("/dashboard", &SessionSnapshot::loading()),
            RouteDecision::Loading
        );
    }

    #[test]
    fn test_signed_out_routes() {
        let snapshot = SessionSnapshot::resolved(None);
        assert_eq!(
            RouteGuard::resolve("/", &snapshot),
            RouteDecision::Render(Route::Login)
        );
        assert_eq!(
            RouteGuard::resolve("/register/", &snapshot),
            RouteDecision::Render(Route::Register)
        );
        assert_eq!(
            RouteGuard::resolve("/reset-password", &snapshot),
            RouteDecision::Render(Route::ResetPassword)
        );
        for path in ["/dashboard", "/symptom-checker", "/nowhere"] {
            assert_eq!(
                RouteGuard::resolve(path, &snapshot),
                RouteDecision::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn test_signed_in_routes() {
        let snapshot = signed_in();
        assert_eq!(
            RouteGuard::resolve("/", &snapshot),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            RouteGuard::resolve("/symptom-checker", &snapshot),
            RouteDecision::Render(Route::SymptomChecker)
        );
        assert_eq!(
            RouteGuard::resolve("/register", &snapshot),
            RouteDecision::Render(Route::NotFound)
        );
    }
}
