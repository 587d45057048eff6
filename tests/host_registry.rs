//! Integration tests for host resolution and permalinks.
//!
//! These tests verify, through the public crate surface:
//! - Host detection from URLs
//! - Per-host owner/project extraction, parsing and permalink rendering
//! - Generic fallback resolution
//! - Error conditions

use vcslink::core::types::{VcsInfo, VcsType};
use vcslink::host::{HostError, HostRegistry, VcsHost};

fn info(vcs_type: VcsType, url: &str, revision: &str, path: &str) -> VcsInfo {
    VcsInfo::new(vcs_type, url, revision, path)
}

mod host_detection {
    use super::*;

    #[test]
    fn detects_each_host() {
        let cases = [
            ("https://bitbucket.org/yevster/spdxtraxample", VcsHost::Bitbucket),
            ("git@github.com:owner/repo.git", VcsHost::GitHub),
            ("https://www.github.com/owner/repo", VcsHost::GitHub),
            ("https://gitlab.com/group/sub/project", VcsHost::GitLab),
            ("https://git.sr.ht/~ben/web", VcsHost::SourceHut),
            ("https://hg.sr.ht/~duangle/paniq_legacy", VcsHost::SourceHut),
        ];
        for (url, expected) in cases {
            assert_eq!(VcsHost::from_url(url), Some(expected), "{}", url);
        }
    }

    #[test]
    fn unknown_hosts() {
        for url in [
            "https://codeberg.org/forgejo/forgejo",
            "https://github.com.example.org/owner/repo",
            "https://notgitlab.com/owner/repo",
            "not a url",
        ] {
            assert_eq!(VcsHost::from_url(url), None, "{}", url);
        }
    }
}

mod bitbucket {
    use super::*;

    const PROJECT_URL: &str = "https://bitbucket.org/yevster/spdxtraxample/src/287aebca5e7ff4167af1fb648640dcdbdf4ec666/LICENSE.txt";

    #[test]
    fn user_or_organization_and_project() {
        assert_eq!(
            VcsHost::Bitbucket.user_or_organization(PROJECT_URL).unwrap(),
            "yevster"
        );
        assert_eq!(VcsHost::Bitbucket.project(PROJECT_URL).unwrap(), "spdxtraxample");
    }

    #[test]
    fn resolves_project_url() {
        assert_eq!(
            vcslink::resolve_vcs_info(PROJECT_URL),
            info(
                VcsType::Git,
                "https://bitbucket.org/yevster/spdxtraxample.git",
                "287aebca5e7ff4167af1fb648640dcdbdf4ec666",
                "LICENSE.txt",
            )
        );
    }

    #[test]
    fn permalinks() {
        let info = info(
            VcsType::Git,
            "https://bitbucket.org/yevster/spdxtraxample",
            "287aebca5e7ff4167af1fb648640dcdbdf4ec666",
            "LICENSE.txt",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 1, None).unwrap(),
            "https://bitbucket.org/yevster/spdxtraxample/src/287aebca5e7ff4167af1fb648640dcdbdf4ec666/LICENSE.txt#lines-1"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 4, Some(8)).unwrap(),
            "https://bitbucket.org/yevster/spdxtraxample/src/287aebca5e7ff4167af1fb648640dcdbdf4ec666/LICENSE.txt#lines-4:8"
        );
    }
}

mod github {
    use super::*;

    const PROJECT_URL: &str =
        "https://github.com/oss-review-toolkit/ort/blob/da7e3a814fc0e6301bf3ed394eba1a661e4d88d7/README.md";

    #[test]
    fn user_or_organization_and_project() {
        assert_eq!(
            vcslink::user_or_organization(PROJECT_URL).unwrap(),
            "oss-review-toolkit"
        );
        assert_eq!(vcslink::project(PROJECT_URL).unwrap(), "ort");
    }

    #[test]
    fn resolves_project_url() {
        assert_eq!(
            vcslink::resolve_vcs_info(PROJECT_URL),
            info(
                VcsType::Git,
                "https://github.com/oss-review-toolkit/ort.git",
                "da7e3a814fc0e6301bf3ed394eba1a661e4d88d7",
                "README.md",
            )
        );
    }

    #[test]
    fn permalinks_from_scp_remote() {
        let info = info(
            VcsType::Git,
            "git@github.com:oss-review-toolkit/ort.git",
            "4a836c3a6a42d358362fa07b014b7d83572a13ed",
            "docs/examples/gradle.ort.yml",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 3, None).unwrap(),
            "https://github.com/oss-review-toolkit/ort/tree/4a836c3a6a42d358362fa07b014b7d83572a13ed/docs/examples/gradle.ort.yml#L3"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 3, Some(5)).unwrap(),
            "https://github.com/oss-review-toolkit/ort/tree/4a836c3a6a42d358362fa07b014b7d83572a13ed/docs/examples/gradle.ort.yml#L3-L5"
        );
    }

    #[test]
    fn permalinks_to_markdown() {
        let info = info(
            VcsType::Git,
            "https://github.com/oss-review-toolkit/ort.git",
            "da7e3a814fc0e6301bf3ed394eba1a661e4d88d7",
            "README.md",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 27, None).unwrap(),
            "https://github.com/oss-review-toolkit/ort/blame/da7e3a814fc0e6301bf3ed394eba1a661e4d88d7/README.md#L27"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 27, Some(28)).unwrap(),
            "https://github.com/oss-review-toolkit/ort/blame/da7e3a814fc0e6301bf3ed394eba1a661e4d88d7/README.md#L27-L28"
        );
    }

    #[test]
    fn same_line_range_uses_single_line_syntax() {
        let info = info(VcsType::Git, "https://github.com/o/r.git", "abc1234", "src/main.rs");
        assert_eq!(
            vcslink::to_permalink(&info, 9, Some(9)).unwrap(),
            vcslink::to_permalink(&info, 9, None).unwrap()
        );
    }
}

mod gitlab {
    use super::*;

    const PROJECT_URL: &str =
        "https://gitlab.com/mbunkus/mkvtoolnix/tree/ec80478f87f1941fe52f15c5f4fa7ee6a70d7006/NEWS.md";

    #[test]
    fn user_or_organization_and_project() {
        assert_eq!(VcsHost::GitLab.user_or_organization(PROJECT_URL).unwrap(), "mbunkus");
        assert_eq!(VcsHost::GitLab.project(PROJECT_URL).unwrap(), "mkvtoolnix");
    }

    #[test]
    fn resolves_project_url() {
        assert_eq!(
            vcslink::resolve_vcs_info(PROJECT_URL),
            info(
                VcsType::Git,
                "https://gitlab.com/mbunkus/mkvtoolnix.git",
                "ec80478f87f1941fe52f15c5f4fa7ee6a70d7006",
                "NEWS.md",
            )
        );
    }

    #[test]
    fn permalinks() {
        let info = info(
            VcsType::Git,
            "https://gitlab.com/mbunkus/mkvtoolnix.git",
            "12542c481ff1e0abcf8d561d6741e561ef5675ca",
            "autogen.sh",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 7, None).unwrap(),
            "https://gitlab.com/mbunkus/mkvtoolnix/tree/12542c481ff1e0abcf8d561d6741e561ef5675ca/autogen.sh#L7"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 7, Some(9)).unwrap(),
            "https://gitlab.com/mbunkus/mkvtoolnix/tree/12542c481ff1e0abcf8d561d6741e561ef5675ca/autogen.sh#L7-9"
        );
    }

    #[test]
    fn permalinks_to_markdown() {
        let info = info(
            VcsType::Git,
            "https://gitlab.com/mbunkus/mkvtoolnix.git",
            "ec80478f87f1941fe52f15c5f4fa7ee6a70d7006",
            "NEWS.md",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 5, None).unwrap(),
            "https://gitlab.com/mbunkus/mkvtoolnix/blame/ec80478f87f1941fe52f15c5f4fa7ee6a70d7006/NEWS.md#L5"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 5, Some(7)).unwrap(),
            "https://gitlab.com/mbunkus/mkvtoolnix/blame/ec80478f87f1941fe52f15c5f4fa7ee6a70d7006/NEWS.md#L5-7"
        );
    }
}

mod sourcehut {
    use super::*;

    const PROJECT_URL: &str = "https://git.sr.ht/~ben/web/tree/2c3d173d/pkgs.nix";

    #[test]
    fn user_or_organization_and_project() {
        assert_eq!(VcsHost::SourceHut.user_or_organization(PROJECT_URL).unwrap(), "ben");
        assert_eq!(VcsHost::SourceHut.project(PROJECT_URL).unwrap(), "web");
    }

    #[test]
    fn resolves_git_project_url() {
        assert_eq!(
            vcslink::resolve_vcs_info(PROJECT_URL),
            info(VcsType::Git, "https://git.sr.ht/~ben/web", "2c3d173d", "pkgs.nix")
        );
    }

    #[test]
    fn resolves_mercurial_project_url() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "https://hg.sr.ht/~duangle/paniq_legacy/browse/f04521a92844/masagin/visual_cues.png"
            ),
            info(
                VcsType::Mercurial,
                "https://hg.sr.ht/~duangle/paniq_legacy",
                "f04521a92844",
                "masagin/visual_cues.png",
            )
        );
    }

    #[test]
    fn git_permalinks() {
        let info = info(
            VcsType::Git,
            "https://git.sr.ht/~ben/web",
            "2c3d173d",
            "assets/css/main.css",
        );
        assert_eq!(
            vcslink::to_permalink(&info, 26, None).unwrap(),
            "https://git.sr.ht/~ben/web/tree/2c3d173d/assets/css/main.css#L26"
        );
        assert_eq!(
            vcslink::to_permalink(&info, 26, Some(29)).unwrap(),
            "https://git.sr.ht/~ben/web/tree/2c3d173d/assets/css/main.css#L26-29"
        );
    }

    #[test]
    fn mercurial_permalinks_have_no_end_line() {
        let info = info(
            VcsType::Mercurial,
            "https://hg.sr.ht/~duangle/paniq_legacy",
            "f04521a92844",
            "masagin/README.txt",
        );
        let single = "https://hg.sr.ht/~duangle/paniq_legacy/browse/f04521a92844/masagin/README.txt#L9";
        assert_eq!(vcslink::to_permalink(&info, 9, None).unwrap(), single);
        // Deliberately differs from the Git viewer: the range is dropped.
        assert_eq!(vcslink::to_permalink(&info, 9, Some(11)).unwrap(), single);
    }
}

mod generic {
    use super::*;

    #[test]
    fn git_repository() {
        assert_eq!(
            vcslink::resolve_vcs_info("https://git-wip-us.apache.org/repos/asf/zeppelin.git"),
            info(
                VcsType::Git,
                "https://git-wip-us.apache.org/repos/asf/zeppelin.git",
                "",
                "",
            )
        );
    }

    #[test]
    fn git_repository_with_path() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "https://git-wip-us.apache.org/repos/asf/zeppelin.git/zeppelin-interpreter"
            ),
            info(
                VcsType::Git,
                "https://git-wip-us.apache.org/repos/asf/zeppelin.git",
                "",
                "zeppelin-interpreter",
            )
        );
    }

    #[test]
    fn npm_url_to_git_repository() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "git+ssh://sub.domain.com:42/foo-bar#b3b5b3c60dcdc39347b23cf94ab8f577239b7df3"
            ),
            info(
                VcsType::Git,
                "ssh://sub.domain.com:42/foo-bar",
                "b3b5b3c60dcdc39347b23cf94ab8f577239b7df3",
                "",
            )
        );
    }

    #[test]
    fn npm_url_to_github_repository() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "https://github.com/mochajs/mocha.git#5bd33a0ba201d227159759e8ced86756595b0c54"
            ),
            info(
                VcsType::Git,
                "https://github.com/mochajs/mocha.git",
                "5bd33a0ba201d227159759e8ced86756595b0c54",
                "",
            )
        );
    }

    #[test]
    fn svn_branch() {
        assert_eq!(
            vcslink::resolve_vcs_info("http://svn.osdn.net/svnroot/tortoisesvn/branches/1.13.x"),
            info(
                VcsType::Subversion,
                "http://svn.osdn.net/svnroot/tortoisesvn",
                "branches/1.13.x",
                "",
            )
        );
    }

    #[test]
    fn svn_branch_and_path() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "http://svn.osdn.net/svnroot/tortoisesvn/branches/1.13.x/src/gpl.txt"
            ),
            info(
                VcsType::Subversion,
                "http://svn.osdn.net/svnroot/tortoisesvn",
                "branches/1.13.x",
                "src/gpl.txt",
            )
        );
    }

    #[test]
    fn svn_tag() {
        assert_eq!(
            vcslink::resolve_vcs_info("http://svn.terracotta.org/svn/ehcache/tags/ehcache-parent-2.21"),
            info(
                VcsType::Subversion,
                "http://svn.terracotta.org/svn/ehcache",
                "tags/ehcache-parent-2.21",
                "",
            )
        );
    }

    #[test]
    fn svn_tag_and_path() {
        assert_eq!(
            vcslink::resolve_vcs_info(
                "http://svn.terracotta.org/svn/ehcache/tags/ehcache-parent-2.21/pom.xml"
            ),
            info(
                VcsType::Subversion,
                "http://svn.terracotta.org/svn/ehcache",
                "tags/ehcache-parent-2.21",
                "pom.xml",
            )
        );
    }

    #[test]
    fn garbage_is_returned_verbatim() {
        assert_eq!(
            vcslink::resolve_vcs_info("::::"),
            info(VcsType::Unknown, "::::", "", "")
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn owner_on_wrong_host_is_not_applicable() {
        let result = VcsHost::Bitbucket.project("https://github.com/owner/repo");
        assert!(matches!(
            result,
            Err(HostError::NotApplicable {
                host: VcsHost::Bitbucket,
                ..
            })
        ));
    }

    #[test]
    fn permalink_needs_revision() {
        let info = vcslink::resolve_vcs_info("https://github.com/owner/repo");
        assert_eq!(
            vcslink::to_permalink(&info, 1, None),
            Err(HostError::MissingRevision)
        );
    }

    #[test]
    fn permalink_for_unsupported_type() {
        let info = info(VcsType::Subversion, "https://github.com/o/r", "trunk", "x");
        assert!(matches!(
            HostRegistry::default().to_permalink(&info, 1, None),
            Err(HostError::NoMatchingHost(_))
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HostError::InvalidLineRange { start: 5, end: 2 }.to_string(),
            "invalid line range: 5-2"
        );
        assert_eq!(
            HostError::NotApplicable {
                host: VcsHost::GitLab,
                url: "https://github.com/o/r".to_string(),
            }
            .to_string(),
            "not a gitlab URL: https://github.com/o/r"
        );
    }
}
