use crate::escape::escape_markup;
use crate::model::{Callout, Category, ColumnWidths, Document, Section};
use crate::style::{rgb, LabelPalette, Palette, StyleConfig};

use super::{bullet_text, colored, heading, tagged};

const E: Category = Category::Essential;
const A: Category = Category::Advanced;
const N: Category = Category::NewFeature;

pub(super) fn style() -> StyleConfig {
    StyleConfig::default()
        .with_palette(Palette {
            title: rgb(0xFF2D20),
            section: rgb(0xF39C12),
            header_fill: rgb(0xF39C12),
            grid: rgb(0xF39C12),
            callout_fill: rgb(0xF0FFF0),
            callout_border: rgb(0x27AE60),
            ..Palette::default()
        })
        .with_labels(LabelPalette {
            default: rgb(0x3498DB),
            ..LabelPalette::default()
        })
}

pub(super) fn document() -> Document {
    Document::new("Laravel 11 Cheat Sheet")
        .with_callout(legend())
        // Page 1
        .with_section(installation())
        .with_section(artisan())
        .with_section(routing())
        .with_page_break()
        // Page 2
        .with_section(database())
        .with_section(eloquent())
        .with_section(blade())
        .with_page_break()
        // Page 3
        .with_section(authentication())
        .with_section(middleware())
        .with_section(validation())
        .with_section(api())
        .with_page_break()
        // Page 4
        .with_section(queues())
        .with_section(cache())
        .with_section(storage())
        .with_section(sail())
        .with_section(testing())
        .with_page_break()
        // Page 5
        .with_section(inertia())
        .with_section(livewire())
        .with_section(deployment())
        .with_callout(tips())
}

fn legend() -> Callout {
    let labels = LabelPalette::default();
    let entry = |color, text: &str| colored(color, &format!("**`{}`**", escape_markup(text)));
    Callout::new([format!(
        "**Color Legend:** {} | {} | {}",
        entry(labels.essential, "Blue = Essential/Daily Commands"),
        entry(labels.advanced, "Red = Advanced/Specialized Commands"),
        entry(labels.new_feature, "Green = New in Laravel 11"),
    )])
    .with_fill(rgb(0xF0F8FF))
    .with_border(rgb(0xBDC3C7))
}

fn installation() -> Section {
    tagged(
        "Installation & Setup",
        &[
            ("composer create-project laravel/laravel app-name", "Create new Laravel project", E),
            ("composer global require laravel/installer", "Install Laravel installer globally", A),
            ("laravel new app-name", "Create new Laravel project using installer", E),
            ("laravel new app-name --git", "Create new project with git repo", N),
            ("laravel new app-name --database=mysql", "Create project with specific database", N),
            ("php artisan serve", "Start development server", E),
            ("php artisan serve --host=0.0.0.0 --port=8080", "Start server with custom host/port", E),
            ("php artisan --version", "Check Laravel version", E),
            ("composer update", "Update Laravel dependencies", E),
            ("composer install", "Install project dependencies", E),
            ("composer install --no-dev --optimize-autoloader", "Production install", E),
            ("npm install", "Install Node.js dependencies", E),
            ("npm run dev", "Compile assets for development", E),
            ("npm run build", "Compile assets for production", E),
            ("npm run watch", "Watch and recompile assets", E),
        ],
    )
}

fn artisan() -> Section {
    tagged(
        "Artisan Commands",
        &[
            ("php artisan list", "List all available commands", E),
            ("php artisan help <command>", "Get help for specific command", E),
            ("php artisan make:model <name>", "Create new model", E),
            ("php artisan make:model <name> -m", "Create model with migration", E),
            ("php artisan make:model <name> -mrc", "Create model, migration, resource controller", E),
            (
                "php artisan make:model <name> -a",
                "Create model with all (migration, factory, seeder, policy, controller, form requests)",
                A,
            ),
            ("php artisan make:controller <name>", "Create new controller", E),
            ("php artisan make:controller <name> --resource", "Create resource controller", E),
            ("php artisan make:controller <name> --api", "Create API resource controller", E),
            ("php artisan make:controller <name> --invokable", "Create single action controller", A),
            ("php artisan make:migration <name>", "Create new migration", E),
            ("php artisan make:migration create_users_table", "Create migration with specific name", E),
            (
                "php artisan make:migration add_column_to_table --table=users",
                "Add column to existing table",
                E,
            ),
            ("php artisan make:seeder <name>", "Create new seeder", E),
            ("php artisan make:seeder UserSeeder", "Create specific seeder", E),
            ("php artisan make:factory <name>", "Create new factory", E),
            ("php artisan make:factory UserFactory --model=User", "Create factory for specific model", E),
            ("php artisan make:request <name>", "Create new form request", E),
            ("php artisan make:request StoreUserRequest", "Create specific form request", E),
            ("php artisan make:middleware <name>", "Create new middleware", E),
            ("php artisan make:middleware CheckAge", "Create specific middleware", E),
            ("php artisan make:policy <name>", "Create new policy", E),
            ("php artisan make:policy UserPolicy --model=User", "Create policy for specific model", E),
            ("php artisan make:event <name>", "Create new event", A),
            ("php artisan make:listener <name>", "Create new listener", A),
            (
                "php artisan make:listener SendWelcomeEmail --event=UserRegistered",
                "Create listener for specific event",
                A,
            ),
            ("php artisan make:job <name>", "Create new job", E),
            ("php artisan make:job ProcessPayment", "Create specific job", E),
            ("php artisan make:mail <name>", "Create new mail class", E),
            (
                "php artisan make:mail WelcomeEmail --markdown=emails.welcome",
                "Create mail with markdown template",
                E,
            ),
            ("php artisan make:notification <name>", "Create new notification", A),
            ("php artisan make:resource <name>", "Create new API resource", E),
            ("php artisan make:resource UserResource", "Create specific API resource", E),
            ("php artisan make:test <name>", "Create new test", E),
            ("php artisan make:test UserTest --unit", "Create unit test", E),
            ("php artisan make:test UserCanLoginTest --feature", "Create feature test", E),
            ("php artisan make:command <name>", "Create new artisan command", A),
            ("php artisan make:provider <name>", "Create new service provider", A),
            ("php artisan make:rule <name>", "Create new validation rule", A),
            ("php artisan make:cast <name>", "Create new custom cast", A),
            ("php artisan make:component <name>", "Create new Blade component", E),
            ("php artisan make:observer <name>", "Create new model observer", A),
        ],
    )
}

fn routing() -> Section {
    tagged(
        "Routing",
        &[
            ("Route::get('/uri', [Controller::class, 'method']);", "Basic GET route", E),
            ("Route::post('/uri', [Controller::class, 'method']);", "POST route", E),
            ("Route::put('/uri', [Controller::class, 'method']);", "PUT route", E),
            ("Route::patch('/uri', [Controller::class, 'method']);", "PATCH route", E),
            ("Route::delete('/uri', [Controller::class, 'method']);", "DELETE route", E),
            (
                "Route::any('/uri', [Controller::class, 'method']);",
                "Route that responds to any HTTP verb",
                A,
            ),
            (
                "Route::match(['get', 'post'], '/uri', [Controller::class, 'method']);",
                "Route responding to multiple verbs",
                A,
            ),
            ("Route::resource('users', UserController::class);", "Resource route", E),
            (
                "Route::apiResource('users', UserController::class);",
                "API resource route (no create/edit)",
                E,
            ),
            (
                "Route::resource('users', UserController::class)->only(['index', 'show']);",
                "Partial resource routes",
                E,
            ),
            (
                "Route::resource('users', UserController::class)->except(['destroy']);",
                "Resource routes except destroy",
                E,
            ),
            ("Route::group(['prefix' => 'admin'], function () { ... });", "Route group with prefix", E),
            (
                "Route::group(['middleware' => 'auth'], function () { ... });",
                "Route group with middleware",
                E,
            ),
            (
                "Route::group(['namespace' => 'Admin'], function () { ... });",
                "Route group with namespace",
                A,
            ),
            ("Route::middleware(['auth'])->group(function () { ... });", "Route group with middleware", E),
            ("Route::name('profile')->get('/profile', ...);", "Named route", E),
            ("route('profile')", "Generate URL for named route", E),
            ("route('profile', ['id' => 1])", "Generate URL with parameters", E),
            ("Route::redirect('/here', '/there');", "Redirect route", E),
            ("Route::redirect('/here', '/there', 301);", "Permanent redirect route", E),
            ("Route::view('/welcome', 'welcome');", "Return view directly", E),
            ("Route::view('/welcome', 'welcome', ['name' => 'Taylor']);", "Return view with data", E),
            ("Route::fallback(function () { ... });", "Fallback route", E),
            ("Route::domain('{account}.example.com')->group(...);", "Subdomain routing", A),
            ("Route::where('id', '[0-9]+')->get('/user/{id}', ...);", "Route parameter constraints", E),
            ("Route::whereNumber('id')->get('/user/{id}', ...);", "Numeric parameter constraint", E),
            ("Route::whereAlpha('name')->get('/user/{name}', ...);", "Alphabetic parameter constraint", A),
            ("Route::whereUuid('id')->get('/user/{id}', ...);", "UUID parameter constraint", A),
            ("php artisan route:list", "List all routes", E),
            ("php artisan route:list --name=user", "List routes with specific name", A),
            ("php artisan route:list --method=GET", "List routes with specific method", A),
            ("php artisan route:cache", "Cache routes for performance", E),
            ("php artisan route:clear", "Clear route cache", E),
        ],
    )
    .with_widths(ColumnWidths::ratios([0.7, 0.3]))
}

fn database() -> Section {
    tagged(
        "Database & Migrations",
        &[
            ("php artisan migrate", "Run pending migrations", E),
            ("php artisan migrate --force", "Force run migrations in production", E),
            ("php artisan migrate --pretend", "Show SQL that would be executed", A),
            ("php artisan migrate --step", "Run migrations one by one", A),
            ("php artisan migrate:rollback", "Rollback last migration", E),
            ("php artisan migrate:rollback --step=5", "Rollback specific number of migrations", E),
            ("php artisan migrate:reset", "Reset all migrations", A),
            ("php artisan migrate:refresh", "Reset and re-run all migrations", E),
            ("php artisan migrate:refresh --seed", "Reset, re-run migrations and seed", E),
            ("php artisan migrate:fresh", "Drop all tables and re-run migrations", E),
            ("php artisan migrate:fresh --seed", "Drop all tables, re-run migrations and seed", E),
            ("php artisan migrate:status", "Show migration status", E),
            ("php artisan make:migration create_users_table", "Create migration", E),
            (
                "php artisan make:migration add_email_to_users_table --table=users",
                "Add column migration",
                E,
            ),
            (
                "php artisan make:migration create_users_table --create=users",
                "Create table migration",
                E,
            ),
            ("php artisan db:seed", "Run database seeders", E),
            ("php artisan db:seed --class=UserSeeder", "Run specific seeder", E),
            ("php artisan db:seed --force", "Force run seeders in production", A),
            ("php artisan db:wipe", "Drop all tables, views, and types", A),
            ("php artisan db:show", "Display information about database", A),
            ("php artisan db:table users", "Display information about table", A),
            ("php artisan db:monitor", "Monitor database connections", A),
            ("php artisan tinker", "Interactive PHP shell", E),
            ("php artisan schema:dump", "Dump current database schema", A),
            ("php artisan schema:dump --prune", "Dump schema and prune migration files", A),
        ],
    )
}

fn eloquent() -> Section {
    tagged(
        "Eloquent ORM",
        &[
            ("User::all()", "Get all records", E),
            ("User::find($id)", "Find record by ID", E),
            ("User::findOrFail($id)", "Find record by ID or throw exception", E),
            ("User::first()", "Get first record", E),
            ("User::firstOrFail()", "Get first record or throw exception", E),
            ("User::latest()->get()", "Get records ordered by latest", E),
            ("User::oldest()->get()", "Get records ordered by oldest", E),
            ("User::where('name', 'John')->get()", "Query with where clause", E),
            ("User::where('age', '>', 18)->get()", "Query with comparison operator", E),
            ("User::whereIn('id', [1, 2, 3])->get()", "Query with whereIn", E),
            ("User::whereBetween('age', [18, 65])->get()", "Query with whereBetween", E),
            ("User::whereNull('email_verified_at')->get()", "Query with whereNull", E),
            ("User::whereNotNull('email_verified_at')->get()", "Query with whereNotNull", E),
            ("User::whereDate('created_at', '2023-01-01')->get()", "Query by date", E),
            ("User::whereYear('created_at', 2023)->get()", "Query by year", A),
            ("User::whereMonth('created_at', 1)->get()", "Query by month", A),
            ("User::select('name', 'email')->get()", "Select specific columns", E),
            ("User::distinct()->get()", "Get distinct records", A),
            ("User::orderBy('name', 'asc')->get()", "Order results ascending", E),
            ("User::orderBy('created_at', 'desc')->get()", "Order results descending", E),
            ("User::take(10)->get()", "Limit results", E),
            ("User::skip(10)->take(10)->get()", "Skip and take (pagination)", A),
            ("User::paginate(15)", "Paginate results", E),
            ("User::simplePaginate(15)", "Simple pagination", E),
            ("User::count()", "Count records", E),
            ("User::max('age')", "Get maximum value", E),
            ("User::min('age')", "Get minimum value", E),
            ("User::avg('age')", "Get average value", E),
            ("User::sum('salary')", "Get sum of values", E),
            ("User::create(['name' => 'John', 'email' => '...'])", "Create new record", E),
            ("User::insert([['name' => 'John'], ['name' => 'Jane']])", "Insert multiple records", E),
            (
                "User::updateOrCreate(['email' => '...'], ['name' => 'John'])",
                "Update or create record",
                E,
            ),
            (
                "User::firstOrCreate(['email' => '...'], ['name' => 'John'])",
                "Find or create record",
                E,
            ),
            ("$user->update(['name' => 'Jane'])", "Update record", E),
            (
                "User::where('active', false)->update(['active' => true])",
                "Update multiple records",
                E,
            ),
            ("$user->delete()", "Delete record", E),
            ("User::destroy([1, 2, 3])", "Delete multiple records by ID", E),
            ("User::where('active', false)->delete()", "Delete multiple records by query", E),
            ("User::with('posts')->get()", "Eager loading", E),
            ("User::with(['posts', 'comments'])->get()", "Multiple eager loading", E),
            ("User::with('posts:id,title,user_id')->get()", "Eager loading specific columns", E),
            ("User::withCount('posts')->get()", "Eager loading with count", E),
        ],
    )
}

fn blade() -> Section {
    tagged(
        "Blade Templates",
        &[
            ("{{ $variable }}", "Echo variable (escaped)", E),
            ("{!! $variable !!}", "Echo variable (unescaped)", E),
            ("@if($condition) ... @endif", "Conditional statement", E),
            ("@foreach($items as $item) ... @endforeach", "Loop through items", E),
            ("@extends('layout.app')", "Extend layout", E),
            ("@section('content') ... @endsection", "Define section", E),
            ("@yield('content')", "Yield section content", E),
            ("@include('partials.header')", "Include partial view", E),
            ("@auth ... @endauth", "Check if user is authenticated", E),
            ("@guest ... @endguest", "Check if user is guest", E),
            ("@csrf", "CSRF token field", E),
            ("@method('PUT')", "Method spoofing field", E),
        ],
    )
    .with_widths(ColumnWidths::ratios([0.5, 0.5]))
}

fn authentication() -> Section {
    tagged(
        "Authentication",
        &[
            ("php artisan make:auth", "Scaffold authentication views", A),
            ("php artisan ui:auth", "Generate authentication scaffolding", A),
            ("Auth::check()", "Check if user is authenticated", E),
            ("Auth::user()", "Get authenticated user", E),
            ("Auth::login($user)", "Log in user", E),
            ("Auth::logout()", "Log out user", E),
            ("auth()->user()", "Helper for authenticated user", E),
            ("auth()->check()", "Helper to check authentication", E),
            ("@auth ... @endauth", "Blade directive for auth check", E),
            ("Route::middleware('auth')->group(...)", "Protect routes with auth", E),
        ],
    )
}

fn middleware() -> Section {
    tagged(
        "Middleware",
        &[
            ("php artisan make:middleware CheckAge", "Create middleware", E),
            ("Route::middleware('auth')->get(...)", "Apply middleware to route", E),
            ("Route::middleware(['auth', 'admin'])->get(...)", "Multiple middleware", E),
            ("protected $middleware = [...] in Kernel.php", "Global middleware", A),
            ("protected $middlewareGroups = [...] in Kernel.php", "Middleware groups", A),
            ("protected $routeMiddleware = [...] in Kernel.php", "Route middleware", E),
            ("$request->user()", "Access user in middleware", E),
            ("return $next($request)", "Pass request to next middleware", E),
            ("abort(403)", "Deny access in middleware", E),
        ],
    )
}

fn validation() -> Section {
    tagged(
        "Validation Rules",
        &[
            ("$request->validate(['email' => 'required|email'])", "Basic validation", E),
            ("'required|string|max:255'", "Common string validation", E),
            ("'required|email|unique:users'", "Email validation with unique", E),
            ("'nullable|integer|min:1'", "Optional integer validation", E),
            ("'required|array|min:1'", "Array validation", E),
            ("'required|file|mimes:jpg,png|max:2048'", "File validation", E),
            ("'required|date|after:today'", "Date validation", E),
            ("'required|confirmed'", "Password confirmation", E),
            ("'sometimes|nullable|string'", "Conditional validation", E),
            ("Rule::exists('users', 'id')", "Database validation rule", E),
            ("Rule::unique('users')->ignore($user->id)", "Unique with ignore", E),
            ("'required|regex:/^[A-Za-z]+$/'", "Regex validation", A),
            ("php artisan make:rule Uppercase", "Custom validation rule", A),
        ],
    )
}

fn api() -> Section {
    tagged(
        "API Development",
        &[
            ("php artisan make:resource UserResource", "Create API resource", E),
            ("php artisan make:resource UserCollection", "Create API collection", E),
            ("return new UserResource($user)", "Return single resource", E),
            ("return UserResource::collection($users)", "Return resource collection", E),
            ("php artisan install:api", "Install Laravel Sanctum", N),
            ("$user->createToken('token-name')", "Create API token", E),
            ("Route::middleware('auth:sanctum')->get(...)", "Protect API route", E),
            ("return response()->json($data)", "Return JSON response", E),
            ("return response()->json($data, 201)", "Return JSON with status", E),
            ("abort_if($condition, 403)", "Conditional abort", E),
            ("$request->expectsJson()", "Check if request expects JSON", A),
        ],
    )
}

fn queues() -> Section {
    tagged(
        "Queues & Jobs",
        &[
            ("php artisan queue:work", "Start processing jobs", E),
            ("php artisan queue:listen", "Listen for new jobs", E),
            ("php artisan queue:restart", "Restart queue workers", E),
            ("php artisan queue:failed", "List failed jobs", E),
            ("php artisan queue:retry all", "Retry all failed jobs", E),
            ("php artisan queue:retry 5", "Retry specific failed job", E),
            ("php artisan queue:flush", "Delete all failed jobs", A),
            ("php artisan queue:clear", "Delete all jobs from queue", A),
            ("php artisan make:job ProcessPayment", "Create new job", E),
            ("php artisan horizon", "Start Laravel Horizon dashboard", N),
        ],
    )
}

fn cache() -> Section {
    tagged(
        "Cache Management",
        &[
            ("Cache::put('key', 'value', 3600)", "Store cache item", E),
            ("Cache::get('key')", "Get cache item", E),
            ("Cache::remember('key', 3600, fn() => expensive_operation())", "Cache with fallback", E),
            ("Cache::forget('key')", "Remove cache item", E),
            ("Cache::flush()", "Clear all cache", E),
            ("php artisan cache:clear", "Clear application cache", E),
            ("php artisan cache:forget key", "Forget specific cache key", A),
            ("Cache::tags(['people', 'artists'])->put('John', $john, 60)", "Tagged cache", A),
            ("Cache::lock('order-processing')->get(function () {...})", "Cache locks", N),
        ],
    )
}

fn storage() -> Section {
    tagged(
        "Storage & Files",
        &[
            ("Storage::disk('public')->put('file.txt', $contents)", "Store file", E),
            ("Storage::get('file.txt')", "Get file contents", E),
            ("Storage::download('file.txt')", "Download file", E),
            ("Storage::delete('file.txt')", "Delete file", E),
            ("Storage::exists('file.txt')", "Check if file exists", E),
            ("$request->file('upload')->store('uploads')", "Store uploaded file", E),
            ("php artisan storage:link", "Create storage symlink", E),
            ("Storage::url('file.txt')", "Get file URL", E),
            ("Storage::size('file.txt')", "Get file size", A),
            ("Storage::lastModified('file.txt')", "Get last modified time", A),
        ],
    )
}

fn sail() -> Section {
    tagged(
        "Laravel Sail (Docker)",
        &[
            ("./vendor/bin/sail up", "Start all services", N),
            ("./vendor/bin/sail up -d", "Start services in background", N),
            ("./vendor/bin/sail down", "Stop all services", N),
            ("./vendor/bin/sail artisan migrate", "Run migrations in container", N),
            ("./vendor/bin/sail composer install", "Install dependencies in container", N),
            ("./vendor/bin/sail npm run dev", "Run npm in container", N),
            ("./vendor/bin/sail test", "Run tests in container", N),
            ("./vendor/bin/sail shell", "Access container shell", N),
            ("./vendor/bin/sail mysql", "Access MySQL in container", N),
            ("./vendor/bin/sail redis", "Access Redis in container", N),
        ],
    )
}

fn testing() -> Section {
    tagged(
        "Testing",
        &[
            ("php artisan make:test UserTest", "Create test class", E),
            ("php artisan test", "Run all tests", E),
            ("php artisan test --filter=UserTest", "Run specific test", E),
            ("$this->assertEquals($expected, $actual)", "Assert equality", E),
            ("$this->assertTrue($condition)", "Assert true", E),
            ("$this->assertDatabaseHas('users', [...])", "Assert database record exists", E),
            ("$this->get('/users')", "Make GET request in test", E),
            ("$this->post('/users', $data)", "Make POST request in test", E),
            ("$this->actingAs($user)", "Authenticate user in test", E),
            ("$this->assertRedirect('/dashboard')", "Assert redirect", E),
        ],
    )
}

fn inertia() -> Section {
    tagged(
        "Inertia.js Integration",
        &[
            ("composer require inertiajs/inertia-laravel", "Install Inertia.js Laravel adapter", N),
            ("php artisan inertia:middleware", "Create Inertia middleware", N),
            ("npm install @inertiajs/vue3", "Install Inertia Vue 3 adapter", N),
            ("npm install @inertiajs/react", "Install Inertia React adapter", N),
            ("Inertia::render('Users/Index', ['users' => $users])", "Render Inertia page with data", E),
            ("return inertia('Users/Show', compact('user'))", "Return Inertia response (helper)", E),
            ("Inertia::location('/dashboard')", "Redirect with Inertia", E),
            ("$request->header('X-Inertia')", "Check if request is from Inertia", A),
            ("Inertia::share('auth.user', fn() => auth()->user())", "Share data globally", E),
            (
                "Inertia::version(fn() => md5_file(public_path('mix-manifest.json')))",
                "Asset versioning",
                A,
            ),
            ("<Head title='Page Title' />", "Set page title (Vue/React)", E),
            ("$page.props.user", "Access shared props (Vue/React)", E),
            ("import { Link } from '@inertiajs/vue3'", "Inertia Link component (Vue)", E),
            ("import { router } from '@inertiajs/vue3'", "Inertia router (Vue)", E),
            ("router.visit('/users')", "Programmatic navigation", E),
            ("router.post('/users', form)", "POST request with Inertia", E),
            ("$page.props.errors", "Access validation errors", E),
        ],
    )
}

fn livewire() -> Section {
    tagged(
        "Livewire Components",
        &[
            ("composer require livewire/livewire", "Install Livewire", N),
            ("php artisan make:livewire Counter", "Create Livewire component", N),
            ("php artisan make:livewire Users/Index", "Create nested Livewire component", N),
            ("<livewire:counter />", "Render Livewire component", E),
            ("@livewire('counter')", "Render with Blade directive", E),
            ("public $count = 0;", "Define public property", E),
            ("public function increment() { $this->count++; }", "Define action method", E),
            ("wire:click='increment'", "Wire click event", E),
            ("wire:model='name'", "Two-way data binding", E),
            ("wire:submit.prevent='save'", "Wire form submission", E),
            ("$this->validate(['name' => 'required']);", "Validate in Livewire", E),
            ("$this->emit('userSaved');", "Emit event", E),
            ("protected $listeners = ['userSaved' => 'refreshUsers'];", "Listen to events", E),
            ("wire:loading", "Show loading state", E),
            ("wire:offline", "Show offline state", A),
            ("$this->skipRender();", "Skip component re-render", A),
        ],
    )
}

fn deployment() -> Section {
    tagged(
        "Deployment & Optimization",
        &[
            ("php artisan config:cache", "Cache configuration", E),
            ("php artisan route:cache", "Cache routes", E),
            ("php artisan view:cache", "Cache views", E),
            ("php artisan config:clear", "Clear config cache", E),
            ("php artisan route:clear", "Clear route cache", E),
            ("php artisan view:clear", "Clear view cache", E),
            ("php artisan cache:clear", "Clear application cache", E),
            ("composer install --optimize-autoloader --no-dev", "Optimize for production", E),
            ("php artisan migrate --force", "Run migrations in production", E),
            ("npm run build", "Build assets for production", E),
        ],
    )
}

fn tips() -> Callout {
    let groups: [(&str, &[&str]); 3] = [
        (
            "Laravel 11 Tips & Best Practices:",
            &[
                "Use Eloquent relationships and eager loading for performance",
                "Always validate user input using Form Requests",
                "Leverage middleware for cross-cutting concerns (auth, CORS, etc.)",
                "Use Laravel Sanctum for API authentication",
                "Implement proper error handling with custom exception classes",
                "Use database seeders and factories for testing data",
                "Write comprehensive tests (Feature + Unit tests)",
                "Use Laravel's built-in caching mechanisms (Redis recommended)",
                "Follow PSR standards and use Laravel Pint for code formatting",
                "Use environment variables for all configuration",
                "Implement proper database indexing and query optimization",
                "Use Laravel's queue system for background jobs",
                "Use Laravel Horizon for queue monitoring in production",
                "Leverage Laravel Sail for consistent development environments",
            ],
        ),
        (
            "Laravel 11 New Features:",
            &[
                "Improved artisan commands with better UX",
                "Enhanced API resource handling",
                "Better Docker integration with Sail",
                "Improved testing capabilities",
                "Enhanced security features",
            ],
        ),
        (
            "Essential Packages for Laravel 11:",
            &[
                "Laravel Debugbar (barryvdh/laravel-debugbar)",
                "Laravel IDE Helper (barryvdh/laravel-ide-helper)",
                "Laravel Telescope (laravel/telescope)",
                "Laravel Horizon (laravel/horizon)",
                "Laravel Sanctum (built-in API authentication)",
                "Laravel Pint (built-in code formatting)",
                "Spatie Laravel packages (permissions, media, etc.)",
                "Laravel Livewire for reactive components",
                "Inertia.js for modern SPA development",
            ],
        ),
    ];

    let mut callout = Callout::default();
    for (index, (title, items)) in groups.into_iter().enumerate() {
        if index > 0 {
            callout = callout.with_line(String::new());
        }
        callout = callout.with_line(heading(title)).with_line(String::new());
        for item in items {
            callout = callout.with_line(bullet_text(item));
        }
    }
    callout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn five_pages_of_sections() {
        let document = document();
        let mut pages = vec![Vec::new()];
        for block in document.blocks() {
            match block {
                Block::Section(section) => pages
                    .last_mut()
                    .expect("at least one page")
                    .push(section.title().to_owned()),
                Block::PageBreak => pages.push(Vec::new()),
                Block::Callout(_) => {}
            }
        }

        assert_eq!(pages.len(), 5);
        assert_eq!(
            pages[0],
            ["Installation & Setup", "Artisan Commands", "Routing"]
        );
        assert_eq!(pages[4].last().map(String::as_str), Some("Deployment & Optimization"));
    }

    #[test]
    fn legend_comes_before_the_first_section() {
        let document = document();
        assert!(matches!(document.blocks().first(), Some(Block::Callout(_))));
    }

    #[test]
    fn every_row_carries_a_category() {
        assert!(document()
            .sections()
            .flat_map(|section| section.rows())
            .all(|row| row.category().is_some()));
    }

    #[test]
    fn blade_echo_braces_render_literally() {
        let plan = crate::layout::plan(&document(), &style()).expect("laravel plans");
        let blade = plan
            .sections()
            .find(|section| section.heading().plain() == "Blade Templates")
            .expect("blade section");
        assert_eq!(blade.rows()[0].cells()[0].plain(), "{{ $variable }}");
    }
}
