//! Prints the multiplication tables of the spacetime basis vectors:
//! basis, bivectors, trivectors, and the pseudoscalar.

use ga_sparse::SpacetimeMultivector;

fn main() {
    let basis: Vec<SpacetimeMultivector> = (0..4)
        .map(SpacetimeMultivector::basis_vector)
        .collect();

    println!("Basis Vectors:");
    for (i, e) in basis.iter().enumerate() {
        println!("e{}: {}", i + 1, e);
    }

    println!("\nBivectors:");
    for i in 0..basis.len() {
        for j in i..basis.len() {
            println!("e{} * e{} = {}", i + 1, j + 1, &basis[i] * &basis[j]);
        }
    }

    println!("\nTrivectors:");
    for i in 0..basis.len() {
        for j in i..basis.len() {
            for k in j..basis.len() {
                println!(
                    "e{} * e{} * e{} = {}",
                    i + 1,
                    j + 1,
                    k + 1,
                    &(&basis[i] * &basis[j]) * &basis[k]
                );
            }
        }
    }

    println!("\nPseudoscalar (e1 * e2 * e3 * e4):");
    println!(
        "{}",
        &(&(&basis[0] * &basis[1]) * &basis[2]) * &basis[3]
    );
}
