//! Walkthrough of the tightstack container API.
//!
//! Demonstrates: construction (default, zeroed, literal) → literal
//! assignment → push → iteration → pop → peek → indexed access →
//! clone independence → take. Output is illustrative, not a stable
//! format.

use tightstack::ArrayStack;

fn print_elements(label: &str, stack: &ArrayStack) {
    print!("{label}: ");
    for value in stack {
        print!("{value} ");
    }
    println!();
}

fn main() {
    println!("=== tightstack demo ===\n");

    // --- Construction ---
    let mut stack1 = ArrayStack::new();
    let stack2 = ArrayStack::zeroed(10).unwrap();
    let stack3 = ArrayStack::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);

    // --- Literal assignment ---
    stack1.assign(&[10, 20, 30]).unwrap();

    // --- Push ---
    stack1.push(69).unwrap();
    print_elements("Elements of stack1", &stack1);

    // --- Pop ---
    match stack1.pop() {
        Ok(value) => println!("Popped element: {value}"),
        Err(err) => println!("cannot pop: {err}"),
    }

    // --- Peek ---
    match stack1.peek() {
        Some(value) => println!("Peeked element: {value}"),
        None => println!("stack is empty, cannot peek"),
    }

    // --- Sizes ---
    println!("Size of stack1: {}", stack1.len());
    println!("Size of stack2: {}", stack2.len());
    println!("Size of stack3: {}", stack3.len());

    print_elements("Elements of stack1", &stack1);
    print_elements("Elements of stack3", &stack3);

    // --- Indexed access: checked and operator forms ---
    println!("stack3[0] = {}", stack3[0]);
    if let Err(err) = stack3.get(100) {
        println!("stack3.get(100): {err}");
    }

    // --- Clone independence ---
    let mut copy = stack1.clone();
    copy.push(7).unwrap();
    println!(
        "After pushing to the copy: original len {}, copy len {}",
        stack1.len(),
        copy.len()
    );

    // --- Move-out with take ---
    let moved = stack1.take();
    println!(
        "After take: moved len {}, source len {}",
        moved.len(),
        stack1.len()
    );
    stack1.push(1).unwrap();
    println!("Source reused after take, top = {:?}", stack1.peek());
}
