use batchkit::config::args::{Command, CustomerAction, HotelAction, ReservationAction};
use batchkit::core::{Pipeline, Storage};
use batchkit::domain::model::{Customer, Hotel};
use batchkit::store::reservations::NewReservation;
use batchkit::store::{CustomerChanges, HotelChanges};
use batchkit::utils::error::BatchError;
use batchkit::utils::logger;
use batchkit::{
    BatchEngine, CliConfig, ConvertPipeline, JsonStore, LocalStorage, SalesPipeline, Settings,
    StatisticsPipeline, WordCountPipeline,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting batchkit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    if settings.monitor {
        tracing::info!("System monitoring enabled");
    }

    if let Err(e) = run(config.command, settings).await {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, settings: Settings) -> Result<(), BatchError> {
    let storage = LocalStorage::new(".".to_string());
    let monitor = settings.monitor;

    match command {
        Command::Convert { input, .. } => {
            run_pipeline(ConvertPipeline::new(storage, settings, input), monitor).await
        }
        Command::Stats { input } => {
            run_pipeline(StatisticsPipeline::new(storage, settings, input), monitor).await
        }
        Command::Words { input } => {
            run_pipeline(WordCountPipeline::new(storage, settings, input), monitor).await
        }
        Command::Sales { catalogue, sales } => {
            run_pipeline(
                SalesPipeline::new(storage, settings, catalogue, sales),
                monitor,
            )
            .await
        }
        Command::Hotel { action, .. } => {
            hotel_command(&JsonStore::new(storage, settings.store_path), action).await
        }
        Command::Customer { action, .. } => {
            customer_command(&JsonStore::new(storage, settings.store_path), action).await
        }
        Command::Reservation { action, .. } => {
            reservation_command(&JsonStore::new(storage, settings.store_path), action).await
        }
    }
}

async fn run_pipeline<P: Pipeline>(pipeline: P, monitor: bool) -> Result<(), BatchError> {
    let engine = BatchEngine::new_with_monitoring(pipeline, monitor);
    let summary = engine.run().await?;
    println!("Results saved to '{}'", summary.output_path);
    Ok(())
}

async fn hotel_command<S: Storage>(
    store: &JsonStore<S>,
    action: HotelAction,
) -> Result<(), BatchError> {
    match action {
        HotelAction::Create {
            hotel_id,
            name,
            location,
            rooms,
        } => {
            store
                .create_hotel(Hotel {
                    hotel_id: hotel_id.clone(),
                    name,
                    location,
                    rooms,
                })
                .await?;
            println!("Hotel '{}' created", hotel_id);
        }
        HotelAction::Delete { hotel_id } => {
            store.delete_hotel(&hotel_id).await?;
            println!("Hotel '{}' deleted", hotel_id);
        }
        HotelAction::Show { hotel_id } => {
            println!("{}", store.display_hotel(&hotel_id).await?);
        }
        HotelAction::Modify { hotel_id, set } => {
            let changes = HotelChanges::from_assignments(&set)?;
            let hotel = store.modify_hotel(&hotel_id, changes).await?;
            println!("{}", batchkit::store::hotels::render_hotel(&hotel));
        }
        HotelAction::Rooms { hotel_id } => {
            let available = store.available_rooms(&hotel_id).await?;
            println!("Available rooms in '{}': {}", hotel_id, available);
        }
    }
    Ok(())
}

async fn customer_command<S: Storage>(
    store: &JsonStore<S>,
    action: CustomerAction,
) -> Result<(), BatchError> {
    match action {
        CustomerAction::Create {
            customer_id,
            name,
            email,
            phone,
        } => {
            store
                .create_customer(Customer {
                    customer_id: customer_id.clone(),
                    name,
                    email,
                    phone,
                })
                .await?;
            println!("Customer '{}' registered", customer_id);
        }
        CustomerAction::Delete { customer_id } => {
            store.delete_customer(&customer_id).await?;
            println!("Customer '{}' deleted", customer_id);
        }
        CustomerAction::Show { customer_id } => {
            println!("{}", store.display_customer(&customer_id).await?);
        }
        CustomerAction::Modify { customer_id, set } => {
            let changes = CustomerChanges::from_assignments(&set);
            let customer = store.modify_customer(&customer_id, changes).await?;
            println!("{}", batchkit::store::customers::render_customer(&customer));
        }
    }
    Ok(())
}

async fn reservation_command<S: Storage>(
    store: &JsonStore<S>,
    action: ReservationAction,
) -> Result<(), BatchError> {
    match action {
        ReservationAction::Create {
            reservation_id,
            customer_id,
            hotel_id,
            check_in,
            check_out,
        } => {
            let reservation = store
                .create_reservation(NewReservation {
                    reservation_id,
                    customer_id,
                    hotel_id,
                    check_in,
                    check_out,
                })
                .await?;
            println!(
                "Reservation '{}' booked at hotel '{}'",
                reservation.reservation_id, reservation.hotel_id
            );
        }
        ReservationAction::Cancel { reservation_id } => {
            store.cancel_reservation(&reservation_id).await?;
            println!("Reservation '{}' cancelled", reservation_id);
        }
        ReservationAction::Show { reservation_id } => {
            println!("{}", store.display_reservation(&reservation_id).await?);
        }
    }
    Ok(())
}
