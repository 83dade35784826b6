//! Resolution keeps user input, fills gaps with well-formed values and
//! always leaves an absolute kubeconfig path.

use kubetf::resolve::resolve_in;
use kubetf::{token, Generator, OsGenerator, ProviderError, TfVars};
use proptest::prelude::*;
use std::path::Path;

/// Generator that must never be consulted.
struct NoGenerator;

impl Generator for NoGenerator {
    fn cluster_suffix(&self) -> Result<String, ProviderError> {
        Err(ProviderError::Generation {
            what: "cluster name suffix",
            reason: "unexpected call".to_string(),
        })
    }

    fn bootstrap_token(&self) -> Result<String, ProviderError> {
        Err(ProviderError::Generation {
            what: "bootstrap token",
            reason: "unexpected call".to_string(),
        })
    }
}

fn is_generated_cluster_name(s: &str) -> bool {
    s.strip_prefix("k8s-cluster-").map_or(false, |suffix| {
        suffix.len() == 6
            && suffix
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

proptest! {
    #[test]
    fn user_values_are_kept(
        cluster_name in "[a-zA-Z0-9][a-zA-Z0-9-]{0,30}",
        bootstrap_token in "\\PC{1,40}",
    ) {
        let mut vars = TfVars {
            cluster_name: cluster_name.clone(),
            bootstrap_token: bootstrap_token.clone(),
            ..TfVars::default()
        };
        resolve_in(&mut vars, &NoGenerator, Path::new("/base")).unwrap();

        prop_assert_eq!(&vars.cluster_name, &cluster_name);
        prop_assert_eq!(vars.bootstrap_token.as_bytes(), bootstrap_token.as_bytes());
        let expected = Path::new("/base").join(&cluster_name).join("kubeconfig");
        prop_assert_eq!(Path::new(&vars.kubeconfig_path), expected.as_path());
    }

    #[test]
    fn kubeconfig_is_always_absolute(
        kubeconfig_path in "(/)?([a-z.]{1,8}/){0,4}[a-z]{0,8}",
    ) {
        let mut vars = TfVars {
            cluster_name: "demo".to_string(),
            bootstrap_token: "abcdef.0123456789abcdef".to_string(),
            kubeconfig_path: kubeconfig_path.clone(),
            ..TfVars::default()
        };
        resolve_in(&mut vars, &NoGenerator, Path::new("/base/run")).unwrap();

        let resolved = Path::new(&vars.kubeconfig_path);
        prop_assert!(resolved.is_absolute());
        if kubeconfig_path.is_empty() {
            prop_assert!(resolved.ends_with("demo/kubeconfig"));
        }
    }

    #[test]
    fn resolution_is_idempotent(
        cluster_name in "[a-z0-9-]{0,12}",
        kubeconfig_path in "[a-z/]{0,16}",
    ) {
        let mut vars = TfVars {
            cluster_name,
            kubeconfig_path,
            ..TfVars::default()
        };
        resolve_in(&mut vars, &OsGenerator, Path::new("/base")).unwrap();
        let first = vars.clone();

        resolve_in(&mut vars, &NoGenerator, Path::new("/elsewhere")).unwrap();
        prop_assert_eq!(vars, first);
    }
}

#[test]
fn generated_values_have_the_documented_shape() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<u8>(), |_| {
            let mut vars = TfVars::default();
            resolve_in(&mut vars, &OsGenerator, Path::new("/base")).unwrap();

            assert!(is_generated_cluster_name(&vars.cluster_name), "{}", vars.cluster_name);
            assert!(token::is_valid(&vars.bootstrap_token), "{}", vars.bootstrap_token);
            assert_eq!(
                vars.kubeconfig_path,
                format!("/base/{}/kubeconfig", vars.cluster_name)
            );
            Ok(())
        })
        .unwrap();
}
