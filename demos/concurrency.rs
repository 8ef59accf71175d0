use dynarray::DynamicArray;
use std::thread;

fn main() {
    println!("--- Cross-thread Ownership Transfer Example ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.push_back(i);
    }

    println!("Original array (thread main): {:?}", arr);

    // Move ownership to another thread
    let handle = thread::spawn(move || {
        println!("Array in new thread: {:?}", arr);
        arr.push_back(100);
        arr // Return ownership back
    });

    let mut arr = handle.join().unwrap();
    println!("Array back in main thread: {:?}", arr);

    // Swap hands the whole buffer over without copying.
    let mut other = DynamicArray::new();
    other.swap_with(&mut arr);
    println!("After swap: main {:?}, other has {} elements", arr, other.len());
}
