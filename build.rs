use std::process::Command;
use chrono::TimeZone;

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn local_timestamp() -> String {
    let now = chrono::Local::now();
    // e.g. "2026-10-19 14:02:11 CEST"; abbreviation omitted if the zone is unknown
    let tz_abbrev = iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<chrono_tz::Tz>().ok())
        .map(|tz| tz.from_utc_datetime(&now.naive_utc()).format("%Z").to_string())
        .unwrap_or_default();
    format!("{} {}", now.format("%Y-%m-%d %H:%M:%S"), tz_abbrev).trim_end().to_string()
}

fn main() {
    println!("cargo:rustc-env=BUILD_HASH={}", git_short_hash());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", local_timestamp());

    println!("cargo:rerun-if-env-changed=FREEPLAY_API_BASE");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
