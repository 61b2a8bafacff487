use graphql::build_schema;
use repositories::ClientRepository;
use services::ValidatorRegistry;

fn main() -> std::io::Result<()> {
    let schema = build_schema(ClientRepository::new(), ValidatorRegistry::client_registration());
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
