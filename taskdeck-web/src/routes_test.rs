//! Tests for the routing system
//!
//! Validates route definitions, URL paths, and the header navigation set.

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use crate::routes::MainRoute;

    /// Tests route enum variants
    #[test]
    fn test_route_variants() {
        let home = MainRoute::Home;
        let login = MainRoute::Login;
        let signup = MainRoute::Signup;
        let tasks = MainRoute::Tasks;
        let assistant = MainRoute::Assistant;
        let not_found = MainRoute::NotFound;

        assert!(format!("{home:?}").contains("Home"));
        assert!(format!("{login:?}").contains("Login"));
        assert!(format!("{signup:?}").contains("Signup"));
        assert!(format!("{tasks:?}").contains("Tasks"));
        assert!(format!("{assistant:?}").contains("Assistant"));
        assert!(format!("{not_found:?}").contains("NotFound"));
    }

    /// Tests route equality
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Home, MainRoute::Home);
        assert_ne!(MainRoute::Login, MainRoute::Signup);
        assert_ne!(MainRoute::Tasks, MainRoute::Assistant);
    }

    /// Tests the URL each route maps to
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Signup.to_path(), "/signup");
        assert_eq!(MainRoute::Tasks.to_path(), "/tasks");
        assert_eq!(MainRoute::Assistant.to_path(), "/assistant");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests path recognition back into routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/tasks"), Some(MainRoute::Tasks));
        assert_eq!(
            MainRoute::recognize("/assistant"),
            Some(MainRoute::Assistant)
        );
        // Unknown paths fall through to the not-found route.
        assert_eq!(
            MainRoute::recognize("/no-such-page"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests header titles
    #[test]
    fn test_route_titles() {
        assert_eq!(MainRoute::Home.title(), "Dashboard");
        assert_eq!(MainRoute::Tasks.title(), "Tasks");
        assert_eq!(MainRoute::Assistant.title(), "Assistant");
        assert_eq!(MainRoute::NotFound.title(), "Not found");
    }

    /// Tests the signed-in header navigation set
    #[test]
    fn test_header_routes() {
        let routes = MainRoute::header_routes();

        assert_eq!(
            routes,
            vec![MainRoute::Home, MainRoute::Tasks, MainRoute::Assistant]
        );
        assert!(!routes.contains(&MainRoute::Login));
        assert!(!routes.contains(&MainRoute::Signup));
        assert!(!routes.contains(&MainRoute::NotFound));
    }

    /// Tests that every route carries a distinct icon from its neighbors in
    /// the header
    #[test]
    fn test_header_icons_distinct() {
        let routes = MainRoute::header_routes();

        for (index, route) in routes.iter().enumerate() {
            for other in &routes[index + 1..] {
                assert_ne!(route.icon_id(), other.icon_id());
            }
        }
    }
}
