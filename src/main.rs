//! Wraps the sentinel and the structured failure, logs both, and shows
//! that each can still be identified after wrapping.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::Inspect)
}
