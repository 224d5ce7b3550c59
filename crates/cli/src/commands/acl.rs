//! get-bucket-acl command

use clap::Args;
use s3policy_core::{BucketAcl, BucketStore, Result};

use super::BucketArgs;
use crate::output::Formatter;

/// Get bucket's ACL
#[derive(Args, Debug)]
pub struct GetBucketAclArgs {
    #[command(flatten)]
    pub target: BucketArgs,

    /// Display extended info
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the get-bucket-acl command
pub async fn get(args: GetBucketAclArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let acl = store.get_bucket_acl(&args.target.bucket).await?;

    if formatter.is_json() {
        formatter.json(&acl);
        return Ok(());
    }

    formatter.println(&render_acl(formatter, &acl, args.verbose));
    Ok(())
}

/// Human-readable ACL; verbose output leads with the owner
fn render_acl(formatter: &Formatter, acl: &BucketAcl, verbose: bool) -> String {
    let mut lines = Vec::new();
    if verbose {
        lines.push(format!("Owner: {}", owner_id(acl)));
        lines.push(String::new());
        lines.push(formatter.heading("ACL:"));
    }

    if acl.grants.is_empty() {
        lines.push("No grants.".to_string());
    } else {
        let mut table = formatter.table(["Grantee", "Type", "Permission"]);
        for grant in &acl.grants {
            table.add_row([
                grant.grantee.label(),
                grant.grantee.kind.as_str(),
                grant.permission.as_deref().unwrap_or("-"),
            ]);
        }
        lines.push(table.to_string());
    }
    lines.join("\n")
}

fn owner_id(acl: &BucketAcl) -> &str {
    acl.owner
        .as_ref()
        .and_then(|o| o.id.as_deref())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputConfig;
    use s3policy_core::{Grant, Grantee, Owner};

    fn plain() -> Formatter {
        Formatter::new(OutputConfig {
            no_color: true,
            ..Default::default()
        })
    }

    fn owned_acl() -> BucketAcl {
        BucketAcl {
            owner: Some(Owner {
                id: Some("79a59df900b949e5".into()),
                display_name: None,
            }),
            grants: vec![Grant {
                grantee: Grantee {
                    kind: "CanonicalUser".into(),
                    id: Some("79a59df900b949e5".into()),
                    display_name: Some("ops".into()),
                    email: None,
                    uri: None,
                },
                permission: Some("FULL_CONTROL".into()),
            }],
        }
    }

    #[test]
    fn test_render_verbose_leads_with_owner() {
        let rendered = render_acl(&plain(), &owned_acl(), true);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Owner: 79a59df900b949e5");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "ACL:");
        let table = lines[3..].join("\n");
        assert!(table.contains("Grantee"));
        assert!(table.contains("ops"));
        assert!(table.contains("FULL_CONTROL"));
    }

    #[test]
    fn test_render_without_verbose_is_grants_only() {
        let rendered = render_acl(&plain(), &owned_acl(), false);
        assert!(!rendered.contains("Owner:"));
        assert!(!rendered.contains("ACL:"));
        assert!(rendered.contains("FULL_CONTROL"));

        let empty = render_acl(&plain(), &BucketAcl::default(), true);
        assert!(empty.ends_with("ACL:\nNo grants."));
    }

    #[test]
    fn test_owner_id() {
        let acl = BucketAcl {
            owner: Some(Owner {
                id: Some("79a59df900b949e5".into()),
                display_name: None,
            }),
            grants: Vec::new(),
        };
        assert_eq!(owner_id(&acl), "79a59df900b949e5");
        assert_eq!(owner_id(&BucketAcl::default()), "-");
    }
}
