    use super::*;

    #[test]
    fn validation_error_without_issues_is_the_top_level_error() {
        let v = ValidationErrorBody {
            error: "invalid application".to_string(),
            issues: Vec::new(),
        };
        assert_eq!(format_validation_error(&v), "invalid application");
    }

    #[test]
    fn validation_error_limits_issue_lines() {
        let issues = (0..10)
            .map(|i| {
                serde_json::json!({
                    "field": format!("components.c{}.cpus", i),
                    "message": "must be between 1 and 100"
                })
            })
            .collect::<Vec<_>>();
        let v: ValidationErrorBody = serde_json::from_value(serde_json::json!({
            "error": "invalid application",
            "issues": issues
        }))
        .expect("parse validation error");

        let text = format_validation_error(&v);
        assert!(text.starts_with("invalid application\n"));
        assert!(text.contains("- components.c0.cpus: must be between 1 and 100"));
        assert!(text.contains("- components.c7.cpus"));
        assert!(!text.contains("c8"));
        assert!(text.contains("... and 2 more"));
    }
