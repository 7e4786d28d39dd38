#[path = "build/config.rs"]
mod config;

use config::config::Cfgs;

fn main() {
    let mut cfgs = Cfgs::new();

    let pc = env_flag("CARGO_FEATURE_PROFILE_PC");
    let mcu = env_flag("CARGO_FEATURE_PROFILE_MCU");

    assert!(
        !(pc && mcu),
        "`profile-pc` and `profile-mcu` are mutually exclusive"
    );

    if cfgs.is_publish() {
        assert!(
            !pc || !mcu,
            "a published build may select at most one size profile"
        );
    }

    let _ = &mut cfgs;

    cfgs.apply();
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok()
}
