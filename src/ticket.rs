//! Lotto tickets and how they are printed.
use std::fmt;

/// How many main numbers are on a ticket.
pub const NUMBERS_PER_TICKET: usize = 6;
/// Smallest number that can be drawn.
pub const MIN_NUMBER: u8 = 1;
/// Largest number that can be drawn.
pub const MAX_NUMBER: u8 = 49;

const FINGERPRINT_INIT: u64 = 0x517c_c1b7_2722_0a95;
const FINGERPRINT_MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

/// One draw: six distinct numbers in ascending order and an optional bonus
/// number that is none of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub(crate) numbers: [u8; NUMBERS_PER_TICKET],
    pub(crate) bonus: Option<u8>,
}

impl Ticket {
    pub fn numbers(&self) -> &[u8; NUMBERS_PER_TICKET] {
        &self.numbers
    }

    pub fn bonus(&self) -> Option<u8> {
        self.bonus
    }

    /// Multiplicative hash of all the drawn values, main numbers first.
    ///
    /// Two tickets with the same numbers and the same bonus always share a
    /// fingerprint, the converse only holds with overwhelming probability.
    pub fn fingerprint(&self) -> u64 {
        self.numbers
            .iter()
            .chain(self.bonus.iter())
            .fold(FINGERPRINT_INIT, |h, &x| {
                (h ^ x as u64).wrapping_mul(FINGERPRINT_MULTIPLIER)
            })
    }
}

/// The six main numbers, zero-padded and separated by single spaces, e.g.
/// `06 09 14 25 32 45`.
impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, x) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02}", x)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Ticket;

    fn ticket(numbers: [u8; 6], bonus: Option<u8>) -> Ticket {
        Ticket { numbers, bonus }
    }

    #[test]
    fn display() {
        assert_eq!(
            ticket([6, 9, 14, 25, 32, 45], None).to_string(),
            "06 09 14 25 32 45"
        );
        assert_eq!(
            ticket([1, 2, 3, 4, 5, 49], Some(7)).to_string(),
            "01 02 03 04 05 49"
        );
    }

    #[test]
    fn fingerprint() {
        let a = ticket([1, 7, 18, 22, 33, 49], Some(12));

        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_ne!(
            a.fingerprint(),
            ticket([1, 7, 18, 22, 33, 49], Some(13)).fingerprint(),
            "the bonus should change the fingerprint"
        );
        assert_ne!(
            a.fingerprint(),
            ticket([1, 7, 18, 22, 33, 48], Some(12)).fingerprint(),
            "the main numbers should change the fingerprint"
        );
        assert_ne!(
            a.fingerprint(),
            ticket([1, 7, 18, 22, 33, 49], None).fingerprint(),
            "a missing bonus should change the fingerprint"
        );
    }

    #[test]
    fn fingerprint_reference() {
        let mut expected: u64 = 0x517c_c1b7_2722_0a95;
        for x in [3u64, 11, 19, 27, 35, 43, 8] {
            expected = (expected ^ x).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        }
        assert_eq!(
            ticket([3, 11, 19, 27, 35, 43], Some(8)).fingerprint(),
            expected
        );
    }
}
