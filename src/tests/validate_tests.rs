    use super::*;

    fn valid_component(name: &str) -> Component {
        let mut c = Component::named(name);
        c.cpus = 1;
        c.mem = 256;
        c.dist_url = "hdfs://namenode/applications/api.jar".to_string();
        c.version = "0.0.1".to_string();
        c.ports.insert("http".to_string(), 8000);
        c.env.insert("JAVA_OPTS".to_string(), "-Xmx256m".to_string());
        c
    }

    #[test]
    fn names_follow_the_identifier_rules() {
        assert!(name("web").is_ok());
        assert!(name("api-v2").is_ok());
        assert!(name("ab").is_err());
        assert!(name("Web").is_err());
        assert!(name("web_app").is_err());
        assert!(name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn dist_url_requires_a_scheme_prefix() {
        assert!(dist_url("hdfs://namenode/x.jar").is_ok());
        assert!(dist_url("s3_x://bucket/key").is_ok());
        assert!(dist_url("namenode/x.jar").is_err());
        assert!(dist_url("a://b").is_err());
        assert!(dist_url("://namenode/x.jar").is_err());
    }

    #[test]
    fn version_requires_three_numeric_parts() {
        assert!(version("0.0.1").is_ok());
        assert!(version("1.2.3-beta").is_ok());
        assert!(version("1.2").is_err());
        assert!(version("1.x.3").is_err());
        assert!(version("").is_err());
    }

    #[test]
    fn numeric_bounds() {
        assert!(cpus(0).is_err());
        assert!(cpus(100).is_ok());
        assert!(cpus(101).is_err());
        assert!(mem(0).is_err());
        assert!(port("http", 0).is_err());
        assert!(port(" ", 80).is_err());
        assert!(env_key("A=B").is_err());
    }

    #[test]
    fn valid_application_has_no_issues() {
        let mut app = Application::named("web");
        app.components
            .insert("api".to_string(), valid_component("api"));
        assert_eq!(application(&app), Vec::<Issue>::new());
    }

    #[test]
    fn application_issues_carry_field_paths() {
        let mut app = Application::named("w");
        let mut c = valid_component("api");
        c.cpus = 0;
        c.ports.insert("https".to_string(), 0);
        app.components.insert("old".to_string(), c);

        let fields: Vec<String> = application(&app).into_iter().map(|i| i.field).collect();
        assert!(fields.contains(&"name".to_string()));
        assert!(fields.contains(&"components.old.name".to_string()));
        assert!(fields.contains(&"components.old.cpus".to_string()));
        assert!(fields.contains(&"components.old.ports.https".to_string()));
        assert!(!fields.contains(&"components.old.mem".to_string()));
    }
