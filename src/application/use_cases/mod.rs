/// Use cases module containing application business logic orchestration
mod generate_interface;

pub use generate_interface::GenerateInterfaceUseCase;
