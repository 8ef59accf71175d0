use dynarray::DynamicArray;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    // Push elements
    for i in 1..=5 {
        arr.push_back(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    // Insert and erase in the middle
    let at = arr.insert(2, 25);
    println!("Inserted 25 at {}: {:?}", at, arr);
    arr.erase_range(0..2);
    println!("Erased [0, 2): {:?}", arr);

    arr.shrink_to_fit();
    println!("After shrink_to_fit: len: {}, cap: {}", arr.len(), arr.capacity());

    // Pop elements
    while let Some(val) = arr.pop_back() {
        println!("Popped: {}, len: {}", val, arr.len());
    }
}
