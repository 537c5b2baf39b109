//! Property tests for pages URL inference.

use proptest::prelude::*;

use pagepush::guess_pages_url;

const SUFFIX: &str = ".github.io";

fn owner() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9-]{0,19}").unwrap()
}

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,10}\\.(com|org)").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A pages repository yields its public URL for every remote form.
    #[test]
    fn property_pages_repository_yields_url(
        owner in owner(),
        host in host(),
        scp in any::<bool>(),
        dot_git in any::<bool>(),
        trailing_slash in any::<bool>(),
    ) {
        let repo = format!("{owner}.github.io{}", if dot_git { ".git" } else { "" });
        let mut url = if scp {
            format!("git@{host}:{owner}/{repo}")
        } else {
            format!("https://{host}/{owner}/{repo}")
        };
        if trailing_slash {
            url.push('/');
        }

        prop_assert_eq!(
            guess_pages_url(&url, SUFFIX),
            Some(format!("https://{owner}.github.io"))
        );
    }

    /// PROPERTY: A repository name without the suffix never yields a URL.
    #[test]
    fn property_project_repository_has_no_url(
        owner in owner(),
        host in host(),
        name in "[a-z0-9_-]{1,20}",
    ) {
        let url = format!("https://{host}/{owner}/{name}.git");
        prop_assert_eq!(guess_pages_url(&url, SUFFIX), None);
    }

    /// PROPERTY: Arbitrary remote text never panics, and any guess is https.
    #[test]
    fn property_guess_never_panics(remote in ".{0,80}") {
        if let Some(url) = guess_pages_url(&remote, SUFFIX) {
            prop_assert!(url.starts_with("https://"));
            prop_assert!(url.to_ascii_lowercase().ends_with(SUFFIX));
        }
    }
}
