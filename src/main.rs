//! Prints a few sets: a card deck, a union and a power set.

use setrel::prelude::*;

fn main() {
    let mut small = Set::empty();
    small.add(1);
    small.add(2);
    small.add(3);
    println!("{small}");

    let ranks = set!["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];
    let suits = set!["♠", "♥", "♦", "♣"];
    let deck = cartesian_product(&ranks, &suits);

    println!("Deck: {deck}");
    println!("Number of cards: {}", deck.cardinality());
    println!("Union of ranks and suits: {}", union(&ranks, &suits));
    println!("Power set of {small}: {}", power_set(&small));
}
