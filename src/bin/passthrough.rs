//! Service returns the query failure unchanged.

fn main() -> anyhow::Result<()> {
    errtrail::run(errtrail::Variant::PassThrough)
}
