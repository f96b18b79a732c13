// Desktop builds on Linux need libxdo; fail early with install hints if it is missing.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if is_desktop && is_linux && !has_libxdo() {
        eprintln!();
        eprintln!("  error: the Safepay desktop build on Linux requires libxdo.");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("  Or build for the browser instead: dx serve");
        eprintln!();
        std::process::exit(1);
    }
}

fn has_libxdo() -> bool {
    let pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success());
    match pkg_config {
        Ok(true) => true,
        // libxdo often ships without a .pc file
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}
