use tracing_subscriber::EnvFilter;

use crate::{Nested, OrderedBranch, PlaneMap};

mod iter;
mod props;
mod prune;
mod traits;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("plane_map=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

/// Insertion-ordered map over string keys and values.
type Ordered = PlaneMap<&'static str, &'static str, OrderedBranch<&'static str, &'static str>>;

/// Two-level fixture used across the suite:
///
/// ```text
/// key1 ─ key2 = val2
///      └ key3 = val3
/// key4 ─ key5 ─ key6 = val6
/// ```
fn sample() -> Ordered {
    PlaneMap::from_nested([
        (
            "key1",
            Nested::map([("key2", Nested::leaf("val2")), ("key3", Nested::leaf("val3"))]),
        ),
        (
            "key4",
            Nested::map([("key5", Nested::map([("key6", Nested::leaf("val6"))]))]),
        ),
    ])
}

/// Same content as [`sample`], default (hash) branches.
fn sample_hashed() -> PlaneMap<&'static str, &'static str> {
    PlaneMap::from_map(&sample())
}
