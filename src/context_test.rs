use super::*;

fn request(
    method: &'static str,
    origin: Option<&'static str>,
    acrm: Option<&'static str>,
) -> RequestContext<'static> {
    RequestContext {
        method,
        origin,
        access_control_request_method: acrm,
        access_control_request_headers: None,
    }
}

mod classify {
    use super::*;

    #[test]
    fn should_return_preflight_when_options_carries_request_method() {
        // Arrange
        let ctx = request("OPTIONS", Some("https://a.test"), Some("POST"));

        // Act
        let kind = RequestKind::classify(&ctx);

        // Assert
        assert_eq!(kind, RequestKind::Preflight);
    }

    #[test]
    fn should_return_options_when_request_method_missing() {
        let ctx = request("OPTIONS", Some("https://a.test"), None);

        assert_eq!(RequestKind::classify(&ctx), RequestKind::Options);
    }

    #[test]
    fn should_return_options_when_request_method_blank() {
        let ctx = request("OPTIONS", None, Some("  "));

        assert_eq!(RequestKind::classify(&ctx), RequestKind::Options);
    }

    #[test]
    fn should_match_options_case_insensitively() {
        let ctx = request("options", None, Some("GET"));

        assert_eq!(RequestKind::classify(&ctx), RequestKind::Preflight);
    }

    #[test]
    fn should_return_simple_when_method_is_not_options_even_with_request_method() {
        // Arrange
        let ctx = request("POST", Some("https://a.test"), Some("PUT"));

        // Act
        let kind = RequestKind::classify(&ctx);

        // Assert
        assert_eq!(kind, RequestKind::Simple);
    }
}

mod origin {
    use super::*;

    #[test]
    fn should_treat_blank_origin_as_absent() {
        assert_eq!(request("GET", Some(" "), None).origin(), None);
        assert_eq!(request("GET", None, None).origin(), None);
    }

    #[test]
    fn should_return_literal_origin_when_present() {
        let ctx = request("GET", Some("https://A.test"), None);

        assert_eq!(ctx.origin(), Some("https://A.test"));
    }
}
