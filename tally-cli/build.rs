use std::process::Command;

fn git(repo: &str, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace_root = format!("{}/..", manifest_dir);

    let sha = git(&workspace_root, &["rev-parse", "--short", "HEAD"]);
    let dirty = git(&workspace_root, &["status", "--porcelain"]).is_some();

    let version = match sha {
        Some(sha) if dirty => format!("{sha}-dirty"),
        Some(sha) => sha,
        None => "unknown".to_string(),
    };

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rustc-env=TALLY_BUILD_SHA={}", version);
}
