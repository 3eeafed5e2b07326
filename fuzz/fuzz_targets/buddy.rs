#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tally_alloc::Buddy;

const MAX_ORDER: u32 = 16;

#[derive(Clone, Debug, Arbitrary)]
enum BuddyOp {
    Allocate { size: usize },
    Deallocate { index: usize },
}

#[derive(Clone, Debug, Arbitrary)]
struct Args {
    ops: Vec<BuddyOp>,
}

fuzz_target!(|args: Args| {
    let mut alloc = Buddy::try_new(MAX_ORDER).expect("fixed config must construct");

    let mut outstanding = Vec::new();

    for op in args.ops {
        match op {
            BuddyOp::Allocate { size } => {
                if let Ok(block) = alloc.allocate(size) {
                    outstanding.push(block);
                }
            }

            BuddyOp::Deallocate { index } => {
                if outstanding.is_empty() {
                    continue;
                }

                let block = outstanding.swap_remove(index % outstanding.len());
                alloc.deallocate(block.as_ptr());
            }
        }
    }

    // Returning every loan must reset the allocator to a single free block.
    for block in outstanding {
        alloc.deallocate(block.as_ptr());
    }

    assert_eq!(alloc.total_allocated(), 0);
    assert_eq!(alloc.outstanding(), 0);
});
