//! Same checks as the main binary, but service replaces the failure, so neither matches.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::InspectReplaced)
}
