// Entity Models - House / Title / Member
//
// Houses are shared values (one Arc per house), titles are a closed
// enumeration, members reference their house and carry salary + birthdate.

pub mod house;
pub mod member;
pub mod title;

pub use house::House;
pub use member::Member;
pub use title::Title;
