use attest_domain::{
    CheckDetails, CheckStatus, HttpProbe, OracleFailure, Outcome, ProbeMethod, SourceLocation,
    UrlDetails, UrlRef,
};
use tracing::debug;

/// Status servers use when they refuse HEAD
const METHOD_NOT_ALLOWED: u16 = 405;

/// Probe a URL for reachability
///
/// HEAD first; a transport failure or a 405 is retried once with GET.
/// 2xx/3xx pass, 4xx fail, anything else warns. An unparseable URL or a
/// failure on both attempts fails.
pub fn verify_url<P: HttpProbe + ?Sized>(probe: &P, url: &UrlRef, target: SourceLocation) -> Outcome {
    let attempt = match probe.probe(ProbeMethod::Head, &url.url) {
        Err(e @ OracleFailure::InvalidRequest(_)) => Err(e),
        Ok(status) if status != METHOD_NOT_ALLOWED => Ok(status),
        first => {
            debug!(url = %url.url, ?first, "HEAD unusable, retrying with GET");
            probe.probe(ProbeMethod::Get, &url.url)
        }
    };

    let (status, message, http_status, error) = match attempt {
        Ok(code @ 200..=399) => (
            CheckStatus::Pass,
            format!("URL is reachable (HTTP {})", code),
            Some(code),
            None,
        ),
        Ok(code @ 400..=499) => (
            CheckStatus::Fail,
            format!("URL returned client error (HTTP {})", code),
            Some(code),
            None,
        ),
        Ok(code) => (
            CheckStatus::Warn,
            format!("URL returned unexpected status (HTTP {})", code),
            Some(code),
            None,
        ),
        Err(OracleFailure::InvalidRequest(reason)) => (
            CheckStatus::Fail,
            format!("invalid URL: {}", reason),
            None,
            Some(reason),
        ),
        Err(e) => (
            CheckStatus::Fail,
            format!("URL is unreachable: {}", e),
            None,
            Some(e.to_string()),
        ),
    };

    Outcome::new(
        target,
        status,
        message,
        CheckDetails::Url(UrlDetails {
            url: url.url.clone(),
            http_status,
            error,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replays scripted answers and records the methods used
    struct Scripted {
        head: Result<u16, OracleFailure>,
        get: Result<u16, OracleFailure>,
        calls: RefCell<Vec<ProbeMethod>>,
    }

    impl Scripted {
        fn new(head: Result<u16, OracleFailure>, get: Result<u16, OracleFailure>) -> Self {
            Self {
                head,
                get,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpProbe for Scripted {
        fn probe(&self, method: ProbeMethod, _url: &str) -> Result<u16, OracleFailure> {
            self.calls.borrow_mut().push(method);
            match method {
                ProbeMethod::Head => self.head.clone(),
                ProbeMethod::Get => self.get.clone(),
            }
        }
    }

    fn run(probe: &Scripted) -> Outcome {
        verify_url(
            probe,
            &UrlRef::new("https://example.org/paper"),
            SourceLocation::new("a.md", 2, "https://example.org/paper"),
        )
    }

    fn details(o: &Outcome) -> &UrlDetails {
        match o.details() {
            CheckDetails::Url(d) => d,
            other => panic!("unexpected details {other:?}"),
        }
    }

    #[test]
    fn test_success_and_redirect_statuses_pass() {
        for code in [200, 204, 301, 399] {
            let probe = Scripted::new(Ok(code), Ok(500));
            let o = run(&probe);
            assert_eq!(o.status(), CheckStatus::Pass, "{code}");
            assert_eq!(probe.calls.borrow().as_slice(), [ProbeMethod::Head]);
        }
    }

    #[test]
    fn test_not_found_fails_with_status() {
        let probe = Scripted::new(Ok(404), Ok(200));
        let o = run(&probe);
        assert_eq!(o.status(), CheckStatus::Fail);
        assert!(o.message().contains("404"));
        assert_eq!(details(&o).http_status, Some(404));
    }

    #[test]
    fn test_server_error_warns() {
        let o = run(&Scripted::new(Ok(503), Ok(200)));
        assert_eq!(o.status(), CheckStatus::Warn);
    }

    #[test]
    fn test_transport_failure_retries_with_get() {
        let probe = Scripted::new(Err(OracleFailure::Failed("connection reset".into())), Ok(200));
        let o = run(&probe);
        assert_eq!(o.status(), CheckStatus::Pass);
        assert_eq!(
            probe.calls.borrow().as_slice(),
            [ProbeMethod::Head, ProbeMethod::Get]
        );
    }

    #[test]
    fn test_head_rejected_retries_with_get() {
        let probe = Scripted::new(Ok(405), Ok(200));
        assert_eq!(run(&probe).status(), CheckStatus::Pass);
        assert_eq!(probe.calls.borrow().len(), 2);
    }

    #[test]
    fn test_both_attempts_fail() {
        let probe = Scripted::new(
            Err(OracleFailure::Timeout),
            Err(OracleFailure::TooManyRedirects),
        );
        let o = run(&probe);
        assert_eq!(o.status(), CheckStatus::Fail);
        assert!(o.message().contains("too many redirects"));
        assert_eq!(details(&o).error.as_deref(), Some("too many redirects"));
    }

    #[test]
    fn test_invalid_url_not_retried() {
        let probe = Scripted::new(
            Err(OracleFailure::InvalidRequest("empty host".into())),
            Ok(200),
        );
        let o = run(&probe);
        assert_eq!(o.status(), CheckStatus::Fail);
        assert_eq!(probe.calls.borrow().len(), 1);
    }
}
