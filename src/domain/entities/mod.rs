//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 그대로 저장되는 영속 엔티티를 정의합니다.
//! 이 애플리케이션의 엔티티는 [`User`](users::user::User) 하나뿐입니다.

pub mod users;
