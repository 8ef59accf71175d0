use dynarray::DynamicArray;
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Clone panics once the shared budget runs out.
struct Tracked {
    id: usize,
    budget: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if self.budget.fetch_sub(1, Ordering::SeqCst) == 0 {
            panic!("clone of element {} refused", self.id);
        }
        Tracked {
            id: self.id,
            budget: self.budget.clone(),
            drops: self.drops.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() {
    println!("--- Exception Safety & RAII Example ---");
    let budget = Arc::new(AtomicUsize::new(usize::MAX));
    let drops = Arc::new(AtomicUsize::new(0));

    let mut arr = DynamicArray::with_capacity(4);
    for id in 0..4 {
        arr.push_back(Tracked {
            id,
            budget: budget.clone(),
            drops: drops.clone(),
        });
    }
    println!("Array full: len {}, cap {}", arr.len(), arr.capacity());

    // The next push must grow, which clones all four; let two succeed.
    budget.store(2, Ordering::SeqCst);
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        arr.push_back(Tracked {
            id: 4,
            budget: budget.clone(),
            drops: drops.clone(),
        });
    }));
    println!("Push failed: {}", result.is_err());
    println!(
        "Array after failure: len {}, cap {}, ids {:?}",
        arr.len(),
        arr.capacity(),
        arr.iter().map(|t| t.id).collect::<Vec<_>>()
    );
    println!("Dropped during rollback: {}", drops.load(Ordering::SeqCst));
    assert_eq!(arr.len(), 4);
    assert_eq!(arr.capacity(), 4);
    // Two partial clones plus the value that was never inserted.
    assert_eq!(drops.load(Ordering::SeqCst), 3);

    drop(arr);
    println!("Total elements dropped: {}", drops.load(Ordering::SeqCst));
    assert_eq!(drops.load(Ordering::SeqCst), 7);
}
