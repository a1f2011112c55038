    use super::*;

    fn client(base_url: &str) -> RemoteClient {
        RemoteClient::new(base_url, None).expect("build client")
    }

    #[test]
    fn application_names_stay_inside_one_path_segment() {
        let client = client("http://127.0.0.1:9292");

        let url = client.application_url("web?x=1");
        assert_eq!(url.path(), "/api/applications/web%3Fx=1");
        assert_eq!(url.query(), None);

        let url = client.application_url("a/b#c");
        assert_eq!(url.path(), "/api/applications/a%2Fb%23c");
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let client = client("http://store.local/agora/");
        assert_eq!(client.applications_url().as_str(), "http://store.local/agora/api/applications");
        assert_eq!(
            client.application_url("web").as_str(),
            "http://store.local/agora/api/applications/web"
        );
    }

    #[test]
    fn base_url_must_be_absolute() {
        let err = RemoteClient::new("127.0.0.1:9292/", None).err().expect("reject url");
        assert!(format!("{:#}", err).contains("invalid store url"));
    }
