use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use garage_rs::alloc::{AllocConfig, VehicleOrder};
use garage_rs::entities::{
    Garage, ParkingLevel, ParkingSpace, Permit, PermitSet, Vehicle, VehicleType,
};

criterion_main!(benches);
criterion_group!(benches, assign_bench);

const N_LEVELS: usize = 10;
const SPACES_PER_LEVEL: [usize; 3] = [10, 50, 200];

/// Every 7th space requires a disability permit, every 5th one is compact.
fn create_garage(spaces_per_level: usize, config: AllocConfig) -> Garage {
    let levels = (0..N_LEVELS)
        .map(|_| {
            let spaces = (0..spaces_per_level)
                .map(|i| match (i % 7, i % 5) {
                    (0, _) => ParkingSpace::reserved(Permit::Disability),
                    (_, 0) => ParkingSpace::compact(),
                    _ => ParkingSpace::default(),
                })
                .collect();
            ParkingLevel::new(spaces)
        })
        .collect();
    Garage::with_config(levels, config)
}

/// One vehicle more than there are spaces, with a mix of types and permits
fn create_vehicles(n: usize) -> Vec<Vehicle> {
    (0..n)
        .map(|i| {
            let vehicle_type = match i % 4 {
                0 => VehicleType::Compact,
                1 => VehicleType::Truck,
                _ => VehicleType::Car,
            };
            let permits = match i % 9 {
                0 => PermitSet::from(Permit::Disability),
                1 => Permit::Disability | Permit::Premium,
                2 => PermitSet::from(Permit::Premium),
                _ => PermitSet::NONE,
            };
            Vehicle::new(vehicle_type, permits)
        })
        .collect()
}

fn assign_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_full_garage");
    for vehicle_order in [VehicleOrder::Arrival, VehicleOrder::PremiumFirst] {
        let config = AllocConfig { vehicle_order };
        for spaces_per_level in SPACES_PER_LEVEL {
            let n_vehicles = N_LEVELS * spaces_per_level + 1;
            group.throughput(criterion::Throughput::Elements(n_vehicles as u64));
            group.bench_function(
                BenchmarkId::new(format!("{vehicle_order:?}"), spaces_per_level),
                |b| {
                    b.iter_batched(
                        || (create_garage(spaces_per_level, config), create_vehicles(n_vehicles)),
                        |(mut garage, vehicles)| garage.assign(vehicles),
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}
