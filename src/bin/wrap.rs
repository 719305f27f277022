//! Service wraps the query failure with context.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::Wrap)
}
