//! Pages URL inference
//!
//! The hosting platform is never contacted; the public URL is guessed from
//! the shape of the remote's repository name (`<owner>.github.io`).

/// Suffix marking a repository that serves a user/organization pages site
pub const DEFAULT_PAGES_SUFFIX: &str = ".github.io";

/// The configured URL of a remote, as read from the repository config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    pub url: String,
}

impl RemoteDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Final path segment with one trailing `.git` removed.
    ///
    /// Handles both `https://host/owner/repo.git` and scp-like
    /// `git@host:repo.git` forms.
    pub fn repository_name(&self) -> Option<&str> {
        let trimmed = self.url.trim().trim_end_matches('/');
        let segment = trimmed
            .rsplit(|c: char| c == '/' || c == ':')
            .next()
            .filter(|s| !s.is_empty())?;
        let name = segment.strip_suffix(".git").unwrap_or(segment);
        (!name.is_empty()).then_some(name)
    }

    /// Guessed public URL, if the repository name carries the pages suffix.
    pub fn pages_url(&self, suffix: &str) -> Option<String> {
        let name = self.repository_name()?;
        let lower_name = name.to_ascii_lowercase();
        let lower_suffix = suffix.to_ascii_lowercase();
        if suffix.is_empty() || name.len() <= suffix.len() || !lower_name.ends_with(&lower_suffix) {
            return None;
        }
        Some(format!("https://{}", name))
    }
}

/// Guess the public pages URL from a raw remote URL.
pub fn guess_pages_url(remote_url: &str, suffix: &str) -> Option<String> {
    RemoteDescriptor::new(remote_url).pages_url(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scp_like_remote_yields_pages_url() {
        assert_eq!(
            guess_pages_url("git@host:owner/owner.github.io.git", DEFAULT_PAGES_SUFFIX),
            Some("https://owner.github.io".to_string())
        );
    }

    #[test]
    fn https_remote_yields_pages_url() {
        assert_eq!(
            guess_pages_url(
                "https://github.com/CejasRuben/CejasRuben.github.io.git\n",
                DEFAULT_PAGES_SUFFIX
            ),
            Some("https://CejasRuben.github.io".to_string())
        );
    }

    #[test]
    fn remote_without_git_suffix_or_with_trailing_slash() {
        assert_eq!(
            guess_pages_url("https://github.com/me/me.github.io/", DEFAULT_PAGES_SUFFIX),
            Some("https://me.github.io".to_string())
        );
    }

    #[test]
    fn scp_like_remote_without_owner_path() {
        assert_eq!(
            guess_pages_url("git@github.com:me.github.io.git", DEFAULT_PAGES_SUFFIX),
            Some("https://me.github.io".to_string())
        );
    }

    #[test]
    fn project_repository_has_no_guess() {
        assert_eq!(
            guess_pages_url("git@github.com:owner/my-site.git", DEFAULT_PAGES_SUFFIX),
            None
        );
    }

    #[test]
    fn suffix_must_terminate_the_name() {
        assert_eq!(
            guess_pages_url(
                "git@github.com:owner/owner.github.io-backup.git",
                DEFAULT_PAGES_SUFFIX
            ),
            None
        );
    }

    #[test]
    fn bare_suffix_is_not_a_site() {
        assert_eq!(guess_pages_url("git@host:owner/.github.io.git", DEFAULT_PAGES_SUFFIX), None);
    }

    #[test]
    fn empty_remote_has_no_guess() {
        assert_eq!(guess_pages_url("", DEFAULT_PAGES_SUFFIX), None);
        assert_eq!(RemoteDescriptor::new("   ").repository_name(), None);
    }

    #[test]
    fn custom_suffix_is_honored() {
        assert_eq!(
            guess_pages_url("https://codeberg.org/me/me.codeberg.page.git", ".codeberg.page"),
            Some("https://me.codeberg.page".to_string())
        );
    }
}
