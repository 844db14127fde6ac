//! Fixture verifying generic options structs and private fields of types
//! without an option kind.

use std::marker::PhantomData;

use auto_options::AutoOptions;

#[derive(AutoOptions)]
struct Options<T: Send> {
    /// Number of workers.
    #[auto_options(default = 4)]
    pub workers: usize,
    marker: PhantomData<T>,
}

fn main() {
    let _ = Options::<u8> {
        workers: 1,
        marker: PhantomData,
    }
    .workers;
    let _ = Options::<u8>::options();
}
