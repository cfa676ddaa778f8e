use bit_vector::{BitVector, BitVectorError};

const NUM_BITS: usize = 128;

fn show(name: &str, bits: &BitVector) {
    println!("  {}: {}", name, bits);
}

fn main() -> Result<(), BitVectorError> {
    env_logger::init();

    println!("=== Bit Vector Examples ===\n");

    example_set_and_clear()?;
    example_logic()?;
    example_counting();
    example_shifts();
    example_mismatch();

    Ok(())
}

fn example_set_and_clear() -> Result<(), BitVectorError> {
    println!("Example 1: Setting bits from both ends");

    let mut ba1 = BitVector::new(NUM_BITS);
    ba1.set_all();
    show("set all", &ba1);
    ba1.clear_all();

    for i in 0..8 {
        ba1.set_bit(i)?;
        ba1.set_bit(NUM_BITS - i - 1)?;
    }
    show("ends set", &ba1);

    for i in [7, 8] {
        println!("  bit {} is {}", i, if ba1.get(i)? { "set" } else { "clear" });
    }
    println!();

    Ok(())
}

fn example_logic() -> Result<(), BitVectorError> {
    println!("Example 2: Bitwise logic");

    let mut ba1 = BitVector::new(NUM_BITS);
    for i in 0..8 {
        ba1.set_bit(i)?;
    }

    let mut ba2 = BitVector::new(NUM_BITS);
    ba2.assign_from(&ba1)?;
    ba2.in_place_bit_not();
    show("!ba1", &ba2);

    ba2 |= &ba1;
    show("ba2 | ba1", &ba2);
    ba2 ^= &ba1;
    show("ba2 ^ ba1", &ba2);
    ba2 &= &ba1;
    show("ba2 & ba1", &ba2);
    println!();

    Ok(())
}

fn example_counting() {
    println!("Example 3: Counting with rollover");

    let mut counter = BitVector::new(NUM_BITS);
    counter.set_all();
    counter.shift_right(NUM_BITS - 9);
    show("0x1FF", &counter);
    counter.increment();
    show("+1", &counter);

    counter.clear_all();
    counter.decrement();
    show("0 - 1", &counter);
    println!();
}

fn example_shifts() {
    println!("Example 4: Shifts");

    let mut bits = BitVector::new(NUM_BITS);
    bits.set_all();
    bits >>= 20;
    show(">> 20", &bits);
    bits <<= 20;
    show("<< 20", &bits);
    println!();
}

fn example_mismatch() {
    println!("Example 5: Mismatched lengths are reported");

    let small = BitVector::new(8);
    let large = BitVector::new(16);
    match small.bit_or(&large) {
        Ok(result) => show("unexpected", &result),
        Err(err) => println!("  error: {}", err),
    }
    println!("  8-bit < 16-bit: {}", small < large);
}
