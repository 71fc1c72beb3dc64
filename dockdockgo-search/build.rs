//! Build script: the default API base URL is baked in at compile time.

fn main() {
    // `config::DEFAULT_BASE_URL` reads this through `option_env!`, so a change
    // must trigger a rebuild.
    println!("cargo::rerun-if-env-changed=DOCKDOCKGO_DEFAULT_API_BASE");
}
